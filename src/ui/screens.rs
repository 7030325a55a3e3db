use crate::models::Student;

/// Rows shown in the main table plus the active name filter, if any. The rows
/// come straight from the store: all students by id, or the result of a name
/// search ordered by name.
#[derive(Default)]
pub(crate) struct StudentListScreen {
    pub(crate) students: Vec<Student>,
    pub(crate) filter: Option<String>,
    pub(crate) selected: usize,
}

impl StudentListScreen {
    /// Replace the rows, keeping `focus_id` selected when it is still present.
    pub(crate) fn set_students(&mut self, students: Vec<Student>, focus_id: Option<i64>) {
        self.students = students;
        if let Some(id) = focus_id {
            if self.select_id(id) {
                return;
            }
        }
        self.ensure_in_bounds();
    }

    pub(crate) fn current(&self) -> Option<&Student> {
        self.students.get(self.selected)
    }

    /// Move the cursor to the row with `id`. Returns `false` when it is not shown.
    pub(crate) fn select_id(&mut self, id: i64) -> bool {
        match self.students.iter().position(|student| student.id == id) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.students.is_empty() {
            return;
        }
        let len = self.students.len() as isize;
        let new = (self.selected as isize + offset).clamp(0, len - 1);
        self.selected = new as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self) {
        self.selected = self.students.len().saturating_sub(1);
    }

    pub(crate) fn is_filtered(&self) -> bool {
        self.filter.is_some()
    }

    fn ensure_in_bounds(&mut self) {
        if self.students.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.students.len() {
            self.selected = self.students.len() - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: i64) -> Student {
        Student {
            id,
            name: format!("Student {}", "x".repeat(id as usize)),
            email: format!("s{id}@school.edu"),
            age: 20,
            course: "History".to_string(),
        }
    }

    #[test]
    fn selection_is_clamped_to_rows() {
        let mut screen = StudentListScreen::default();
        screen.move_selection(3);
        assert_eq!(screen.selected, 0);

        screen.set_students((1..=4).map(student).collect(), None);
        screen.move_selection(10);
        assert_eq!(screen.current().map(|s| s.id), Some(4));
        screen.move_selection(-10);
        assert_eq!(screen.current().map(|s| s.id), Some(1));
    }

    #[test]
    fn reload_keeps_focus_or_falls_back_to_last_row() {
        let mut screen = StudentListScreen::default();
        screen.set_students((1..=5).map(student).collect(), Some(4));
        assert_eq!(screen.selected, 3);

        screen.set_students((1..=2).map(student).collect(), Some(4));
        assert_eq!(screen.current().map(|s| s.id), Some(2));
    }
}
