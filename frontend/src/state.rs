use std::rc::Rc;

use yew::Reducible;

use crate::content::{Category, Project, PROJECTS, TESTIMONIALS};
use crate::theme::{Palette, Theme};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub project: String,
}

impl ContactForm {
    /// Mirrors the browser's `required` check on all three fields.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.project.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Project,
}

/// Page state. Every field is independent of the others.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub theme: Theme,
    pub filter: Category,
    pub testimonial: usize,
    pub menu_open: bool,
    pub form: ContactForm,
    pub submitted: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            filter: Category::All,
            testimonial: 0,
            menu_open: false,
            form: ContactForm::default(),
            submitted: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewAction {
    ToggleTheme,
    SetFilter(Category),
    AdvanceTestimonial,
    SelectTestimonial(usize),
    ToggleMenu,
    CloseMenu,
    EditField(FormField, String),
    Submit,
}

impl ViewState {
    /// Returns the state after `action`; `self` is left untouched.
    pub fn apply(&self, action: ViewAction) -> Self {
        let mut next = self.clone();
        match action {
            ViewAction::ToggleTheme => next.theme = self.theme.toggled(),
            ViewAction::SetFilter(category) => next.filter = category,
            ViewAction::AdvanceTestimonial => {
                next.testimonial = crate::carousel::next_index(self.testimonial, TESTIMONIALS.len());
            }
            ViewAction::SelectTestimonial(index) => {
                // Dots only ever offer valid indices.
                if index < TESTIMONIALS.len() {
                    next.testimonial = index;
                }
            }
            ViewAction::ToggleMenu => next.menu_open = !self.menu_open,
            ViewAction::CloseMenu => next.menu_open = false,
            ViewAction::EditField(field, value) => match field {
                FormField::Name => next.form.name = value,
                FormField::Email => next.form.email = value,
                FormField::Project => next.form.project = value,
            },
            ViewAction::Submit => {
                if self.form.is_complete() {
                    next.submitted = true;
                }
            }
        }
        next
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    pub fn visible_projects(&self) -> Vec<&'static Project> {
        filtered_projects(self.filter)
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Projects shown under `filter`, in table order.
pub fn filtered_projects(filter: Category) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|project| filter == Category::All || project.category == filter)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ViewState {
        ViewState::default()
            .apply(ViewAction::EditField(FormField::Name, "A".to_string()))
            .apply(ViewAction::EditField(FormField::Email, "a@x.com".to_string()))
            .apply(ViewAction::EditField(FormField::Project, "test".to_string()))
    }

    #[test]
    fn initial_state_shows_every_project() {
        let state = ViewState::default();
        assert_eq!(state.filter, Category::All);
        assert_eq!(state.visible_projects().len(), 6);
        assert_eq!(state.testimonial, 0);
        assert!(!state.menu_open);
        assert!(!state.submitted);
        assert_eq!(state.form, ContactForm::default());
    }

    #[test]
    fn mobile_filter_keeps_table_order() {
        let state = ViewState::default().apply(ViewAction::SetFilter(Category::Mobile));
        let titles: Vec<_> = state.visible_projects().iter().map(|p| p.title).collect();
        assert_eq!(titles, ["TrailSync", "Pocketly"]);
    }

    #[test]
    fn each_category_filter_is_an_ordered_subset() {
        for category in &Category::ALL[1..] {
            let filtered = filtered_projects(*category);
            let expected: Vec<_> = PROJECTS.iter().filter(|p| p.category == *category).collect();
            assert_eq!(filtered, expected);
        }
        let all: Vec<_> = PROJECTS.iter().collect();
        assert_eq!(filtered_projects(Category::All), all);
    }

    #[test]
    fn carousel_advances_modulo_count() {
        let mut state = ViewState::default();
        let mut seen = Vec::new();
        for _ in 0..3 {
            state = state.apply(ViewAction::AdvanceTestimonial);
            seen.push(state.testimonial);
        }
        assert_eq!(seen, [1, 2, 0]);
    }

    #[test]
    fn manual_selection_overrides_index() {
        let state = ViewState::default()
            .apply(ViewAction::AdvanceTestimonial)
            .apply(ViewAction::SelectTestimonial(2));
        assert_eq!(state.testimonial, 2);
        let next = state.apply(ViewAction::AdvanceTestimonial);
        assert_eq!(next.testimonial, 0);
        let ignored = next.apply(ViewAction::SelectTestimonial(TESTIMONIALS.len()));
        assert_eq!(ignored.testimonial, 0);
    }

    #[test]
    fn menu_toggles_and_closes() {
        let open = ViewState::default().apply(ViewAction::ToggleMenu);
        assert!(open.menu_open);
        assert!(!open.apply(ViewAction::ToggleMenu).menu_open);
        assert!(!open.apply(ViewAction::CloseMenu).menu_open);
        assert!(!ViewState::default().apply(ViewAction::CloseMenu).menu_open);
    }

    #[test]
    fn fields_are_edited_independently() {
        let state = ViewState::default().apply(ViewAction::EditField(FormField::Email, "x@y.z".into()));
        assert_eq!(state.form.email, "x@y.z");
        assert!(state.form.name.is_empty());
        assert!(state.form.project.is_empty());
    }

    #[test]
    fn submit_sets_flag_and_never_reverts() {
        let state = filled_form();
        assert!(!state.submitted);
        let submitted = state.apply(ViewAction::Submit);
        assert!(submitted.submitted);
        let later = submitted
            .apply(ViewAction::Submit)
            .apply(ViewAction::EditField(FormField::Name, String::new()))
            .apply(ViewAction::ToggleTheme)
            .apply(ViewAction::AdvanceTestimonial);
        assert!(later.submitted);
        assert_eq!(submitted.form, state.form);
    }

    #[test]
    fn submit_is_blocked_while_a_field_is_empty() {
        let state = filled_form().apply(ViewAction::EditField(FormField::Project, String::new()));
        assert!(!state.apply(ViewAction::Submit).submitted);
    }

    #[test]
    fn transitions_do_not_touch_other_fields() {
        let base = filled_form().apply(ViewAction::SetFilter(Category::Web));
        let toggled = base.apply(ViewAction::ToggleTheme);
        assert_eq!(toggled.theme, Theme::Light);
        assert_eq!(toggled.filter, base.filter);
        assert_eq!(toggled.form, base.form);
        assert_eq!(toggled.testimonial, base.testimonial);
        assert_eq!(toggled.apply(ViewAction::ToggleTheme).palette(), base.palette());
    }

    #[test]
    fn reducer_wraps_apply() {
        let state = Rc::new(ViewState::default());
        let reduced = state.clone().reduce(ViewAction::SetFilter(Category::Startup));
        assert_eq!(reduced.filter, Category::Startup);
        assert_eq!(state.filter, Category::All);
    }
}
