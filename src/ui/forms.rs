use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::{NewStudent, Student, StudentPatch};
use crate::validation::{
    parse_age, validate_course, validate_email, validate_name, Field, ValidationError,
    ValidationResult,
};

/// Field order used for Tab navigation and rendering.
pub(crate) const FORM_FIELDS: [Field; 4] = [Field::Name, Field::Email, Field::Age, Field::Course];

/// Label shown in front of each input line. Cursor math depends on it.
pub(crate) fn field_label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Email => "Email",
        Field::Age => "Age",
        Field::Course => "Course",
    }
}

/// Input state shared by the add and edit dialogs. When `current` is set the
/// form is editing an existing student: blank inputs keep the current value,
/// which is shown as a placeholder.
#[derive(Clone)]
pub(crate) struct StudentForm {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) age: String,
    pub(crate) course: String,
    pub(crate) active: Field,
    pub(crate) error: Option<String>,
    pub(crate) current: Option<Student>,
}

impl Default for StudentForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            age: String::new(),
            course: String::new(),
            active: Field::Name,
            error: None,
            current: None,
        }
    }
}

impl StudentForm {
    /// Empty form for the edit dialog, showing `student` as placeholders.
    pub(crate) fn for_update(student: &Student) -> Self {
        Self {
            current: Some(student.clone()),
            ..Self::default()
        }
    }

    pub(crate) fn is_update(&self) -> bool {
        self.current.is_some()
    }

    pub(crate) fn focus(&mut self, field: Field) {
        self.active = field;
    }

    pub(crate) fn next_field(&mut self) {
        let idx = field_index(self.active);
        self.active = FORM_FIELDS[(idx + 1) % FORM_FIELDS.len()];
    }

    pub(crate) fn previous_field(&mut self) {
        let idx = field_index(self.active);
        self.active = FORM_FIELDS[(idx + FORM_FIELDS.len() - 1) % FORM_FIELDS.len()];
    }

    /// Append a character to the active field. The age field only takes digits.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        if self.active == Field::Age && !ch.is_ascii_digit() {
            return false;
        }
        self.value_mut(self.active).push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.value_mut(self.active).pop();
    }

    /// Validate every field for a brand new record.
    pub(crate) fn parse_new(&self) -> ValidationResult<NewStudent> {
        Ok(NewStudent {
            name: validate_name(&self.name)?,
            email: validate_email(&self.email)?,
            age: parse_age(&self.age)?,
            course: validate_course(&self.course)?,
        })
    }

    /// Collect the typed overrides. Blank inputs become "keep current".
    pub(crate) fn to_patch(&self) -> StudentPatch {
        fn non_blank(value: &str) -> Option<String> {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }

        StudentPatch {
            name: non_blank(&self.name),
            email: non_blank(&self.email),
            age: non_blank(&self.age),
            course: non_blank(&self.course),
        }
    }

    /// Record a validation failure and move focus to the offending field.
    pub(crate) fn reject(&mut self, err: &ValidationError) {
        self.focus(err.field());
        self.error = Some(err.to_string());
    }

    pub(crate) fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Age => &self.age,
            Field::Course => &self.course,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Age => &mut self.age,
            Field::Course => &mut self.course,
        }
    }

    fn placeholder(&self, field: Field) -> String {
        match &self.current {
            Some(student) => match field {
                Field::Name => format!("[{}]", student.name),
                Field::Email => format!("[{}]", student.email),
                Field::Age => format!("[{}]", student.age),
                Field::Course => format!("[{}]", student.course),
            },
            None => "<required>".to_string(),
        }
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, field: Field) -> Line<'static> {
        let value = self.value(field);
        let is_active = self.active == field;

        let display = if value.is_empty() {
            self.placeholder(field)
        } else {
            value.to_string()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{}: ", field_label(field))),
            Span::styled(display, style),
        ])
    }

    /// Character count of the typed value, used to place the cursor.
    pub(crate) fn value_len(&self, field: Field) -> usize {
        self.value(field).chars().count()
    }
}

fn field_index(field: Field) -> usize {
    FORM_FIELDS
        .iter()
        .position(|candidate| *candidate == field)
        .unwrap_or(0)
}

/// Pending update waiting for a yes/no answer. The form is kept so a rejected
/// save (for example a taken email) can reopen the dialog as it was.
#[derive(Clone)]
pub(crate) struct ConfirmStudentUpdate {
    pub(crate) before: Student,
    pub(crate) after: NewStudent,
    pub(crate) form: StudentForm,
}

/// Numeric prompt for the "find by id" dialog.
#[derive(Default, Clone)]
pub(crate) struct IdPrompt {
    pub(crate) input: String,
    pub(crate) error: Option<String>,
}

impl IdPrompt {
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_ascii_digit() {
            self.input.push(ch);
            self.error = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn backspace(&mut self) {
        self.input.pop();
    }

    pub(crate) fn parse(&self) -> Result<i64, String> {
        self.input
            .trim()
            .parse::<i64>()
            .map_err(|_| "Enter a numeric student ID.".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> StudentForm {
        let mut form = StudentForm::default();
        for (field, text) in [
            (Field::Name, "Grace Hopper"),
            (Field::Email, "Grace@Navy.MIL"),
            (Field::Age, "45"),
            (Field::Course, "Compilers"),
        ] {
            form.focus(field);
            for ch in text.chars() {
                form.push_char(ch);
            }
        }
        form
    }

    #[test]
    fn tab_order_wraps_in_both_directions() {
        let mut form = StudentForm::default();
        form.previous_field();
        assert_eq!(form.active, Field::Course);
        form.next_field();
        assert_eq!(form.active, Field::Name);
        form.next_field();
        assert_eq!(form.active, Field::Email);
    }

    #[test]
    fn age_field_accepts_digits_only() {
        let mut form = StudentForm::default();
        form.focus(Field::Age);
        assert!(!form.push_char('x'));
        assert!(form.push_char('4'));
        assert!(form.push_char('2'));
        form.backspace();
        assert_eq!(form.age, "4");
    }

    #[test]
    fn parse_new_normalizes_fields() {
        let student = filled_form().parse_new().unwrap();
        assert_eq!(student.email, "grace@navy.mil");
        assert_eq!(student.age, 45);
    }

    #[test]
    fn reject_moves_focus_to_failing_field() {
        let mut form = filled_form();
        form.age = "12".to_string();
        form.focus(Field::Name);
        let err = form.parse_new().unwrap_err();
        form.reject(&err);
        assert_eq!(form.active, Field::Age);
        assert!(form.error.as_deref().unwrap().contains("between 16 and 100"));
    }

    #[test]
    fn update_form_turns_blank_inputs_into_kept_values() {
        let current = Student {
            id: 3,
            name: "Alan Turing".to_string(),
            email: "alan@bletchley.uk".to_string(),
            age: 41,
            course: "Computability".to_string(),
        };
        let mut form = StudentForm::for_update(&current);
        form.focus(Field::Course);
        for ch in "Morphogenesis".chars() {
            form.push_char(ch);
        }

        let patch = form.to_patch();
        assert_eq!(patch.name, None);
        assert_eq!(patch.course.as_deref(), Some("Morphogenesis"));
        let merged = patch.apply(&current).unwrap();
        assert_eq!(merged.name, "Alan Turing");
        assert_eq!(merged.course, "Morphogenesis");
    }

    #[test]
    fn id_prompt_requires_digits() {
        let mut prompt = IdPrompt::default();
        assert!(prompt.parse().is_err());
        assert!(!prompt.push_char('-'));
        prompt.push_char('1');
        prompt.push_char('2');
        assert_eq!(prompt.parse(), Ok(12));
    }
}
