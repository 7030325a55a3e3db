use std::mem;

use crossterm::event::KeyCode;
use log::debug;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::db::{StoreError, StoreResult, StudentStore};
use crate::models::Student;
use crate::validation::Field;

use super::forms::{field_label, ConfirmStudentUpdate, IdPrompt, StudentForm, FORM_FIELDS};
use super::helpers::{cursor_column, open_popup};
use super::screens::StudentListScreen;

const APP_TITLE: &str = "Student Database Management System";
/// Header space for the title and record count.
const HEADER_HEIGHT: u16 = 3;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Rows skipped by PageUp/PageDown.
const PAGE_STEP: isize = 10;

/// Fine-grained modes layered on top of the student table.
enum Mode {
    Normal,
    Adding(StudentForm),
    Editing(StudentForm),
    ConfirmUpdate(ConfirmStudentUpdate),
    ConfirmDelete(Student),
    Searching(SearchState),
    LookingUp(IdPrompt),
    ConfirmExit,
}

/// State for an active name search.
struct SearchState {
    query: String,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state for the terminal session. Owns the store, and
/// with it the database connection, for the whole run.
pub struct App<S: StudentStore> {
    store: S,
    list: StudentListScreen,
    total: u64,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl<S: StudentStore> App<S> {
    /// Load the initial table. Fails only when the store cannot be read at all.
    pub fn new(store: S) -> StoreResult<Self> {
        let students = store.get_all()?;
        let total = store.count()?;
        let mut list = StudentListScreen::default();
        list.set_students(students, None);

        Ok(Self {
            store,
            list,
            total,
            mode: Mode::Normal,
            status: None,
        })
    }

    /// Hand the store back once the session is over so it can be closed.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Apply one key press. Returns `true` once the user has confirmed exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code),
            Mode::Adding(form) => self.handle_add(code, form),
            Mode::Editing(form) => self.handle_edit(code, form),
            Mode::ConfirmUpdate(confirm) => self.handle_confirm_update(code, confirm),
            Mode::ConfirmDelete(student) => self.handle_confirm_delete(code, student),
            Mode::Searching(state) => self.handle_search(code, state),
            Mode::LookingUp(prompt) => self.handle_lookup(code, prompt),
            Mode::ConfirmExit => self.handle_confirm_exit(code, &mut exit),
        };

        exit
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> Mode {
        match code {
            KeyCode::Char('q') => Mode::ConfirmExit,
            KeyCode::Esc => {
                if self.list.is_filtered() {
                    self.clear_filter();
                    Mode::Normal
                } else {
                    Mode::ConfirmExit
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.list.move_selection(-1);
                Mode::Normal
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.list.move_selection(1);
                Mode::Normal
            }
            KeyCode::PageUp => {
                self.list.move_selection(-PAGE_STEP);
                Mode::Normal
            }
            KeyCode::PageDown => {
                self.list.move_selection(PAGE_STEP);
                Mode::Normal
            }
            KeyCode::Home => {
                self.list.select_first();
                Mode::Normal
            }
            KeyCode::End => {
                self.list.select_last();
                Mode::Normal
            }
            KeyCode::Char('a') | KeyCode::Char('+') => {
                self.clear_status();
                Mode::Adding(StudentForm::default())
            }
            KeyCode::Char('e') | KeyCode::Enter => match self.list.current() {
                Some(student) => Mode::Editing(StudentForm::for_update(student)),
                None => {
                    self.set_status("No student selected to edit.", StatusKind::Error);
                    Mode::Normal
                }
            },
            KeyCode::Char('d') | KeyCode::Delete => match self.list.current() {
                Some(student) => Mode::ConfirmDelete(student.clone()),
                None => {
                    self.set_status("No student selected to delete.", StatusKind::Error);
                    Mode::Normal
                }
            },
            KeyCode::Char('/') => {
                let query = self.list.filter.clone().unwrap_or_default();
                Mode::Searching(SearchState { query })
            }
            KeyCode::Char('g') | KeyCode::Char('#') => Mode::LookingUp(IdPrompt::default()),
            KeyCode::Char('r') => {
                self.list.filter = None;
                match self.reload(None) {
                    Ok(()) => self.set_status(
                        format!("Loaded {} student(s).", self.total),
                        StatusKind::Info,
                    ),
                    Err(err) => self.report(&err),
                }
                Mode::Normal
            }
            _ => Mode::Normal,
        }
    }

    fn handle_add(&mut self, code: KeyCode, mut form: StudentForm) -> Mode {
        match code {
            KeyCode::Esc => {
                self.set_status("Add student cancelled.", StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => {
                if self.save_new(&mut form) {
                    return Mode::Normal;
                }
            }
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Mode::Adding(form)
    }

    fn handle_edit(&mut self, code: KeyCode, mut form: StudentForm) -> Mode {
        match code {
            KeyCode::Esc => {
                self.set_status("Update cancelled.", StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => return self.review_update(form),
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Mode::Editing(form)
    }

    fn handle_confirm_update(&mut self, code: KeyCode, confirm: ConfirmStudentUpdate) -> Mode {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Update cancelled.", StatusKind::Info);
                Mode::Normal
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.perform_update(confirm)
            }
            _ => Mode::ConfirmUpdate(confirm),
        }
    }

    fn handle_confirm_delete(&mut self, code: KeyCode, student: Student) -> Mode {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Delete operation cancelled.", StatusKind::Info);
                Mode::Normal
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.perform_delete(&student);
                Mode::Normal
            }
            _ => Mode::ConfirmDelete(student),
        }
    }

    fn handle_search(&mut self, code: KeyCode, mut state: SearchState) -> Mode {
        match code {
            KeyCode::Esc => {
                self.clear_filter();
                return Mode::Normal;
            }
            KeyCode::Enter => {
                if let Some(filter) = &self.list.filter {
                    let text = format!(
                        "Found {} student(s) with name containing '{}'.",
                        self.list.students.len(),
                        filter
                    );
                    self.set_status(text, StatusKind::Info);
                }
                return Mode::Normal;
            }
            KeyCode::Up => {
                self.list.move_selection(-1);
                return Mode::Searching(state);
            }
            KeyCode::Down => {
                self.list.move_selection(1);
                return Mode::Searching(state);
            }
            KeyCode::Backspace => {
                state.query.pop();
            }
            KeyCode::Char(ch) if !ch.is_control() => state.query.push(ch),
            _ => return Mode::Searching(state),
        }

        let trimmed = state.query.trim();
        self.list.filter = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        if let Err(err) = self.reload(None) {
            self.report(&err);
        }
        Mode::Searching(state)
    }

    fn handle_lookup(&mut self, code: KeyCode, mut prompt: IdPrompt) -> Mode {
        match code {
            KeyCode::Esc => Mode::Normal,
            KeyCode::Backspace => {
                prompt.backspace();
                Mode::LookingUp(prompt)
            }
            KeyCode::Enter => match prompt.parse() {
                Ok(id) => {
                    self.lookup(id);
                    Mode::Normal
                }
                Err(message) => {
                    prompt.error = Some(message);
                    Mode::LookingUp(prompt)
                }
            },
            KeyCode::Char(ch) => {
                prompt.push_char(ch);
                Mode::LookingUp(prompt)
            }
            _ => Mode::LookingUp(prompt),
        }
    }

    fn handle_confirm_exit(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        match code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                *exit = true;
                Mode::Normal
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Exit cancelled.", StatusKind::Info);
                Mode::Normal
            }
            _ => Mode::ConfirmExit,
        }
    }

    /// Validate and insert the add form. Returns `true` when the dialog can close.
    fn save_new(&mut self, form: &mut StudentForm) -> bool {
        let student = match form.parse_new() {
            Ok(student) => student,
            Err(err) => {
                form.reject(&err);
                return false;
            }
        };

        match self.store.create(&student) {
            Ok(created) => {
                // The new row may not match an active search, so show everything.
                self.list.filter = None;
                if let Err(err) = self.reload(Some(created.id)) {
                    self.report(&err);
                    return true;
                }
                self.set_status(
                    format!("Student added successfully! {created}"),
                    StatusKind::Info,
                );
                true
            }
            Err(err) => {
                self.reject_form(form, &err);
                false
            }
        }
    }

    /// Merge the edit form into the current record and ask for confirmation.
    fn review_update(&mut self, mut form: StudentForm) -> Mode {
        let Some(before) = form.current.clone() else {
            return Mode::Normal;
        };

        let patch = form.to_patch();
        if patch.is_empty() {
            self.set_status("No changes to save.", StatusKind::Info);
            return Mode::Normal;
        }

        match patch.apply(&before) {
            Ok(after) if after == before.to_new() => {
                self.set_status("No changes to save.", StatusKind::Info);
                Mode::Normal
            }
            Ok(after) => Mode::ConfirmUpdate(ConfirmStudentUpdate {
                before,
                after,
                form,
            }),
            Err(err) => {
                form.reject(&err);
                Mode::Editing(form)
            }
        }
    }

    fn perform_update(&mut self, confirm: ConfirmStudentUpdate) -> Mode {
        let ConfirmStudentUpdate {
            before,
            after,
            mut form,
        } = confirm;

        match self.store.update(before.id, &after) {
            Ok(updated) => {
                if let Err(err) = self.reload(Some(updated.id)) {
                    self.report(&err);
                } else {
                    self.set_status(
                        format!("Student updated successfully! {updated}"),
                        StatusKind::Info,
                    );
                }
                Mode::Normal
            }
            Err(err @ StoreError::NotFound { .. }) => {
                self.report(&err);
                if let Err(err) = self.reload(None) {
                    self.report(&err);
                }
                Mode::Normal
            }
            Err(err) => {
                self.reject_form(&mut form, &err);
                Mode::Editing(form)
            }
        }
    }

    fn perform_delete(&mut self, student: &Student) {
        match self.store.delete(student.id) {
            Ok(removed) => {
                if let Err(err) = self.reload(None) {
                    self.report(&err);
                } else if removed {
                    self.set_status(
                        format!("Student deleted successfully! (ID {})", student.id),
                        StatusKind::Info,
                    );
                } else {
                    self.report(&StoreError::NotFound { id: student.id });
                }
            }
            Err(err) => self.report(&err),
        }
    }

    fn lookup(&mut self, id: i64) {
        match self.store.get_by_id(id) {
            Ok(Some(student)) => {
                if !self.list.select_id(id) {
                    self.list.filter = None;
                    if let Err(err) = self.reload(Some(id)) {
                        self.report(&err);
                        return;
                    }
                }
                self.set_status(format!("Student found: {student}"), StatusKind::Info);
            }
            Ok(None) => self.report(&StoreError::NotFound { id }),
            Err(err) => self.report(&err),
        }
    }

    fn clear_filter(&mut self) {
        let focus = self.list.current().map(|student| student.id);
        self.list.filter = None;
        match self.reload(focus) {
            Ok(()) => self.clear_status(),
            Err(err) => self.report(&err),
        }
    }

    /// Re-run the active query (all students or the name search) and the count.
    fn reload(&mut self, focus_id: Option<i64>) -> StoreResult<()> {
        let students = match &self.list.filter {
            Some(fragment) => self.store.search_by_name(fragment)?,
            None => self.store.get_all()?,
        };
        self.total = self.store.count()?;
        self.list.set_students(students, focus_id);
        debug!(
            "event=list_reload module=ui status=ok rows={} total={}",
            self.list.students.len(),
            self.total
        );
        Ok(())
    }

    /// Keep a form open after a failed save and point it at the cause.
    fn reject_form(&mut self, form: &mut StudentForm, err: &StoreError) {
        match err {
            StoreError::Validation(validation) => form.reject(validation),
            StoreError::DuplicateKey { .. } => {
                form.focus(Field::Email);
                form.error = Some(err.to_string());
            }
            _ => form.error = Some(err.to_string()),
        }
        self.report(err);
    }

    fn report(&mut self, err: &StoreError) {
        self.set_status(err.to_string(), StatusKind::Error);
    }

    fn set_status<T: Into<String>>(&mut self, text: T, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_header(frame, chunks[0]);
        self.draw_table(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);

        match &self.mode {
            Mode::Adding(form) => self.draw_student_form(frame, area, " Add New Student ", form),
            Mode::Editing(form) => self.draw_student_form(frame, area, " Update Student ", form),
            Mode::ConfirmUpdate(confirm) => self.draw_confirm_update(frame, area, confirm),
            Mode::ConfirmDelete(student) => self.draw_confirm_delete(frame, area, student),
            Mode::Searching(state) => self.draw_search_bar(frame, chunks[1], state),
            Mode::LookingUp(prompt) => self.draw_lookup(frame, area, prompt),
            Mode::ConfirmExit => self.draw_confirm_exit(frame, area),
            Mode::Normal => {}
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {APP_TITLE} v{} ", env!("CARGO_PKG_VERSION")));

        let mut spans = vec![
            Span::raw("Database Status: "),
            Span::styled("Connected", Style::default().fg(Color::Green)),
            Span::raw(format!(" | Total Students: {}", self.total)),
        ];
        if let Some(filter) = &self.list.filter {
            spans.push(Span::styled(
                format!(
                    " | Name contains '{}': {} match(es)",
                    filter,
                    self.list.students.len()
                ),
                Style::default().fg(Color::Cyan),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, area);
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect) {
        if self.list.students.is_empty() {
            let text = match &self.list.filter {
                Some(filter) => format!("No students found with name containing '{filter}'."),
                None => "No students found in database. Press 'a' to add one.".to_string(),
            };
            let message = Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::NONE));
            frame.render_widget(message, area);
            return;
        }

        let header_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let header = Row::new(["ID", "NAME", "EMAIL", "AGE", "COURSE"]).style(header_style);

        let rows = self.list.students.iter().map(|student| {
            Row::new(vec![
                Cell::from(student.id.to_string()),
                Cell::from(student.name.clone()),
                Cell::from(student.email.clone()),
                Cell::from(student.age.to_string()),
                Cell::from(student.course.clone()),
            ])
        });

        let widths = [
            Constraint::Length(6),
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Length(5),
            Constraint::Percentage(30),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(" Students "))
            .row_highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("> ");

        let mut state = TableState::default();
        state.select(Some(self.list.selected));
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let status_line = match &self.status {
            Some(status) => Line::from(vec![Span::styled(status.text.clone(), status.kind.style())]),
            None => Line::from(""),
        };

        let paragraph =
            Paragraph::new(vec![status_line, self.footer_instructions()]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let keys: &[(&str, &str)] = match &self.mode {
            Mode::Normal => &[
                ("[a]", " Add   "),
                ("[e]", " Edit   "),
                ("[d]", " Delete   "),
                ("[/]", " Search Name   "),
                ("[g]", " Find ID   "),
                ("[r]", " Reload   "),
                ("[q]", " Quit"),
            ],
            Mode::Adding(_) | Mode::Editing(_) => &[
                ("[Tab]", " Next Field   "),
                ("[Enter]", " Save   "),
                ("[Esc]", " Cancel"),
            ],
            Mode::Searching(_) => &[
                ("[Enter]", " Keep Results   "),
                ("[Esc]", " Clear Search"),
            ],
            Mode::LookingUp(_) => &[("[Enter]", " Find   "), ("[Esc]", " Cancel")],
            Mode::ConfirmUpdate(_) | Mode::ConfirmDelete(_) | Mode::ConfirmExit => {
                &[("[y]", " Confirm   "), ("[n]", " Cancel")]
            }
        };

        let spans = keys
            .iter()
            .flat_map(|(key, action)| {
                [
                    Span::styled(key.to_string(), key_style),
                    Span::raw(action.to_string()),
                ]
            })
            .collect::<Vec<_>>();
        Line::from(spans)
    }

    fn draw_student_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &StudentForm) {
        let inner = open_popup(frame, area, title, 60, 50);

        let mut lines: Vec<Line> = FORM_FIELDS
            .iter()
            .map(|field| form.build_line(*field))
            .collect();
        lines.push(Line::from(""));

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else if form.is_update() {
            lines.push(Line::from(Span::styled(
                "Leave a field blank to keep its current value.",
                Style::default().fg(Color::Gray),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save | Tab to switch | Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let row = FORM_FIELDS
            .iter()
            .position(|field| *field == form.active)
            .unwrap_or(0) as u16;
        let prefix = format!("{}: ", field_label(form.active));
        let cursor_x = cursor_column(inner, &prefix, form.value_len(form.active));
        frame.set_cursor_position((cursor_x, inner.y + row));
    }

    fn draw_confirm_update(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmStudentUpdate) {
        let inner = open_popup(frame, area, " Confirm Update ", 70, 40);
        let after = confirm.after.clone().with_id(confirm.before.id);

        let lines = vec![
            Line::from("Current student details:"),
            Line::from(Span::styled(
                confirm.before.to_string(),
                Style::default().fg(Color::Gray),
            )),
            Line::from("New details:"),
            Line::from(Span::styled(
                after.to_string(),
                Style::default().fg(Color::Yellow),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Do you want to update this student? Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, student: &Student) {
        let inner = open_popup(frame, area, " Delete Student ", 60, 35);

        let lines = vec![
            Line::from("Student to be deleted:"),
            Line::from(student.to_string()),
            Line::from(""),
            Line::from(Span::styled(
                "WARNING: This action cannot be undone!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_search_bar(&self, frame: &mut Frame, area: Rect, state: &SearchState) {
        let height = 3u16.min(area.height);
        let popup_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height,
        };
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search Students by Name ");
        let inner = block.inner(popup_area);
        let paragraph = Paragraph::new(Span::raw(format!("Name: {}", state.query))).block(block);
        frame.render_widget(paragraph, popup_area);

        let cursor_x = cursor_column(inner, "Name: ", state.query.chars().count());
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn draw_lookup(&self, frame: &mut Frame, area: Rect, prompt: &IdPrompt) {
        let inner = open_popup(frame, area, " Search Student by ID ", 40, 25);

        let mut lines = vec![Line::from(format!("Student ID: {}", prompt.input))];
        if let Some(error) = &prompt.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        }

        frame.render_widget(Paragraph::new(lines), inner);
        let cursor_x = cursor_column(inner, "Student ID: ", prompt.input.chars().count());
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn draw_confirm_exit(&self, frame: &mut Frame, area: Rect) {
        let inner = open_popup(frame, area, " Exit Application ", 50, 25);
        let lines = vec![
            Line::from("Are you sure you want to exit?"),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}
