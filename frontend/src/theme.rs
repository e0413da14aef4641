#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Label of the control that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "☀ Light",
            Theme::Light => "◑ Dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette::DARK,
            Theme::Light => Palette::LIGHT,
        }
    }

    /// RGB triplet the particle field strokes and fills with.
    pub fn particle_accent(self) -> Rgb {
        match self {
            Theme::Dark => Rgb(0, 255, 200),
            Theme::Light => Rgb(59, 130, 246),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn rgba(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

/// Every color the page derives from the theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub accent: &'static str,
    pub accent_dim: &'static str,
    pub card: &'static str,
    pub border: &'static str,
    pub muted: &'static str,
    pub secondary_background: &'static str,
    pub nav_background: &'static str,
    pub on_accent: &'static str,
    pub avatar_tint: &'static str,
    pub footer_background: &'static str,
    pub footer_foreground: &'static str,
    pub hero_glow: &'static str,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: "#080c10",
        foreground: "#e8f4f0",
        accent: "#00ffc8",
        accent_dim: "rgba(0,255,200,0.12)",
        card: "#0d1520",
        border: "rgba(0,255,200,0.15)",
        muted: "#7a9e96",
        secondary_background: "#0a1018",
        nav_background: "rgba(8,12,16,0.85)",
        on_accent: "#080c10",
        avatar_tint: "#1a2a22",
        footer_background: "#060a0d",
        footer_foreground: "#4a6b62",
        hero_glow: "radial-gradient(ellipse at 50% 40%, rgba(0,255,200,0.05) 0%, transparent 70%)",
    };

    pub const LIGHT: Palette = Palette {
        background: "#f8fafc",
        foreground: "#0f172a",
        accent: "#2563eb",
        accent_dim: "rgba(37,99,235,0.1)",
        card: "#ffffff",
        border: "rgba(37,99,235,0.15)",
        muted: "#64748b",
        secondary_background: "#f1f5f9",
        nav_background: "rgba(248,250,252,0.85)",
        on_accent: "#ffffff",
        avatar_tint: "#dbeafe",
        footer_background: "#0f172a",
        footer_foreground: "#94a3b8",
        hero_glow: "radial-gradient(ellipse at 50% 40%, rgba(37,99,235,0.06) 0%, transparent 70%)",
    };

    /// Inline style declaring the palette as CSS custom properties, so the
    /// static stylesheet can reference `var(--accent)` and friends.
    pub fn css_vars(&self) -> String {
        [
            ("--bg", self.background),
            ("--fg", self.foreground),
            ("--accent", self.accent),
            ("--accent-dim", self.accent_dim),
            ("--card-bg", self.card),
            ("--border", self.border),
            ("--muted", self.muted),
            ("--second-bg", self.secondary_background),
            ("--nav-bg", self.nav_background),
            ("--on-accent", self.on_accent),
            ("--avatar-tint", self.avatar_tint),
            ("--footer-bg", self.footer_background),
            ("--footer-fg", self.footer_foreground),
            ("--hero-glow", self.hero_glow),
        ]
        .iter()
        .map(|(name, value)| format!("{}: {};", name, value))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_every_color() {
        let start = Theme::default();
        let back = start.toggled().toggled();
        assert_eq!(back, start);
        assert_eq!(back.palette(), start.palette());
        assert_eq!(back.particle_accent(), start.particle_accent());
        assert_eq!(back.palette().css_vars(), start.palette().css_vars());
    }

    #[test]
    fn light_mode_swaps_accent_and_dependents() {
        let dark = Theme::Dark.palette();
        let light = Theme::Light.palette();
        assert_eq!(dark.accent, "#00ffc8");
        assert_eq!(light.accent, "#2563eb");
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.border, light.border);
        assert_ne!(dark.accent_dim, light.accent_dim);
        assert_eq!(Theme::Light.particle_accent(), Rgb(59, 130, 246));
    }

    #[test]
    fn css_vars_expose_the_accent() {
        let vars = Palette::DARK.css_vars();
        assert!(vars.contains("--accent: #00ffc8;"));
        assert!(vars.contains("--bg: #080c10;"));
    }

    #[test]
    fn rgba_formats_alpha() {
        assert_eq!(Rgb(0, 255, 200).rgba(0.5), "rgba(0, 255, 200, 0.5)");
    }
}
