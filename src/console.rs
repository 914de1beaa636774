//! Interactive line-based front end.
//!
//! Login prompt, then a menu of the six sections, each with View / Add /
//! Edit / Delete tabs. Every action calls one command handler and the next
//! screen re-reads the store, so output always reflects the latest state.
//! End of input ends the session cleanly.

use std::fmt::Display;
use std::io::{self, BufRead, ErrorKind, Write};
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::commands::appointments::{self, AppointmentForm};
use crate::commands::doctors::{self, DoctorForm};
use crate::commands::patients::{self, PatientForm};
use crate::commands::payments::{self, PaymentForm};
use crate::commands::prescriptions::{self, PrescriptionForm};
use crate::commands::session::{self, LoginForm};
use crate::commands::visits::{self, VisitForm};
use crate::config;
use crate::core_state::CoreState;
use crate::models::*;
use crate::store::{label_name, SelectOption};

/// Top-level menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Section(EntityKind),
    Activity,
    Logout,
    Quit,
    Invalid,
}

/// Accepts a 1-based section number, a section name, `a`/`activity`,
/// `l`/`logout` or `q`/`quit`.
pub fn parse_menu_choice(input: &str) -> MenuChoice {
    let choice = input.trim().to_lowercase();
    match choice.as_str() {
        "a" | "activity" => return MenuChoice::Activity,
        "l" | "logout" => return MenuChoice::Logout,
        "q" | "quit" => return MenuChoice::Quit,
        _ => {}
    }
    if let Some(index) = parse_index(&choice, EntityKind::ALL.len()) {
        return MenuChoice::Section(EntityKind::ALL[index]);
    }
    EntityKind::from_str(&choice)
        .map(MenuChoice::Section)
        .unwrap_or(MenuChoice::Invalid)
}

/// 1-based list position to 0-based index, if within `len`.
fn parse_index(input: &str, len: usize) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= len => Some(n - 1),
        _ => None,
    }
}

/// Render serialisable records as an aligned text table.
///
/// Columns follow the field order of the first record.
pub fn render_table<T: Serialize>(rows: &[T]) -> String {
    let objects: Vec<Map<String, Value>> = rows
        .iter()
        .filter_map(|row| match serde_json::to_value(row) {
            Ok(Value::Object(map)) => Some(map),
            _ => None,
        })
        .collect();
    let Some(first) = objects.first() else {
        return String::new();
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let cells: Vec<Vec<String>> = objects
        .iter()
        .map(|obj| headers.iter().map(|h| cell_text(obj.get(h))).collect())
        .collect();
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_row(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &cells {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

// ═══════════════════════════════════════════════════════════
// Console
// ═══════════════════════════════════════════════════════════

/// Edit answer that empties a free-text field.
const CLEAR_FIELD: &str = "-";

pub struct Console<'a, R, W> {
    state: &'a CoreState,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(state: &'a CoreState, input: R, output: W) -> Self {
        Self {
            state,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        match self.event_loop() {
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                tracing::debug!("Console input closed");
                Ok(())
            }
            other => other,
        }
    }

    fn event_loop(&mut self) -> io::Result<()> {
        loop {
            if !self.state.is_logged_in() {
                self.login_screen()?;
                continue;
            }
            match self.main_menu()? {
                MenuChoice::Section(kind) => self.section(kind)?,
                MenuChoice::Activity => self.activity()?,
                MenuChoice::Logout => {
                    session::logout(self.state);
                    writeln!(self.output, "Logged out")?;
                }
                MenuChoice::Quit => return Ok(()),
                MenuChoice::Invalid => writeln!(self.output, "Invalid choice")?,
            }
        }
    }

    // ── Screens ─────────────────────────────────────────────

    fn login_screen(&mut self) -> io::Result<()> {
        writeln!(self.output, "== {} Login ==", config::APP_NAME)?;
        let username = self.ask("Username")?;
        let password = self.ask("Password")?;
        match session::login(LoginForm { username, password }, self.state) {
            Ok(welcome) => writeln!(self.output, "{welcome}"),
            Err(e) => writeln!(self.output, "{e}"),
        }
    }

    fn main_menu(&mut self) -> io::Result<MenuChoice> {
        writeln!(self.output)?;
        writeln!(self.output, "== MENU ==")?;
        if let Some(user) = self.state.current_user() {
            writeln!(self.output, "Logged in as {user}")?;
        }
        for (i, kind) in EntityKind::ALL.iter().enumerate() {
            writeln!(self.output, "{}) {}", i + 1, kind.title())?;
        }
        writeln!(self.output, "A) Activity")?;
        writeln!(self.output, "L) Logout")?;
        writeln!(self.output, "Q) Quit")?;
        let choice = self.ask("Choice")?;
        Ok(parse_menu_choice(&choice))
    }

    fn section(&mut self, kind: EntityKind) -> io::Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "== {} ==", kind.title())?;
            writeln!(self.output, "1) View  2) Add  3) Edit  4) Delete  0) Back")?;
            let tab = self.ask("Tab")?;
            match tab.trim() {
                "1" => self.view(kind)?,
                "2" => self.add(kind)?,
                "3" => self.edit(kind)?,
                "4" => self.delete(kind)?,
                "0" | "" => return Ok(()),
                _ => writeln!(self.output, "Invalid choice")?,
            }
        }
    }

    fn activity(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "== Activity ==")?;
        let rows = session::recent_activity(config::ACTIVITY_ROWS, self.state);
        self.show(rows, "No activity")
    }

    fn view(&mut self, kind: EntityKind) -> io::Result<()> {
        let empty = format!("No {}", kind.as_str());
        match kind {
            EntityKind::Doctor => {
                let query = self.ask("Search by name or specialty")?;
                let rows = doctors::search_doctors(&query, self.state);
                self.show(rows, &empty)
            }
            EntityKind::Patient => {
                let query = self.ask("Search by name")?;
                let rows = patients::search_patients(&query, self.state);
                self.show(rows, &empty)
            }
            EntityKind::Appointment => {
                self.show(appointments::list_appointments(self.state), &empty)
            }
            EntityKind::Visit => self.show(visits::list_visits(self.state), &empty),
            EntityKind::Prescription => {
                self.show(prescriptions::list_prescriptions(self.state), &empty)
            }
            EntityKind::Payment => self.show(payments::list_payments(self.state), &empty),
        }
    }

    fn add(&mut self, kind: EntityKind) -> io::Result<()> {
        let result = match kind {
            EntityKind::Doctor => {
                let form = DoctorForm {
                    id: self.ask("ID")?,
                    name: self.ask("Name")?,
                    specialty: self.ask("Specialty")?,
                };
                doctors::add_doctor(form, self.state).map(|_| ())
            }
            EntityKind::Patient => {
                let form = PatientForm {
                    id: self.ask("ID")?,
                    name: self.ask("Name")?,
                    age: self.ask_bounded("Age", MIN_AGE, MAX_AGE, MIN_AGE)?,
                };
                patients::add_patient(form, self.state).map(|_| ())
            }
            EntityKind::Appointment => {
                let id = self.ask("ID")?;
                let patient = self.pick("Patient", patients::patient_options(self.state))?;
                let doctor = self.pick("Doctor", doctors::doctor_options(self.state))?;
                let date = self.ask_date()?;
                let form = AppointmentForm {
                    id,
                    patient,
                    doctor,
                    date,
                };
                appointments::add_appointment(form, self.state).map(|_| ())
            }
            EntityKind::Visit => {
                let id = self.ask("ID")?;
                let patient = self.pick("Patient", patients::patient_options(self.state))?;
                let doctor = self.pick("Doctor", doctors::doctor_options(self.state))?;
                let date = self.ask_date()?;
                let diagnosis = self.ask("Diagnosis")?;
                let form = VisitForm {
                    id,
                    patient,
                    doctor,
                    date,
                    diagnosis,
                };
                visits::add_visit(form, self.state).map(|_| ())
            }
            EntityKind::Prescription => {
                let id = self.ask("ID")?;
                let patient = self.pick("Patient", patients::patient_options(self.state))?;
                let doctor = self.pick("Doctor", doctors::doctor_options(self.state))?;
                let medications = self.ask("Medicines")?;
                let notes = self.ask("Notes")?;
                let form = PrescriptionForm {
                    id,
                    patient,
                    doctor,
                    medications,
                    notes,
                };
                prescriptions::add_prescription(form, self.state).map(|_| ())
            }
            EntityKind::Payment => {
                let id = self.ask("ID")?;
                let patient = self.pick("Patient", patients::patient_options(self.state))?;
                let visit_id = self.pick("Visit ID", visits::visit_options(self.state))?;
                let amount = self.ask_bounded("Amount", MIN_AMOUNT, MAX_AMOUNT, MIN_AMOUNT)?;
                let date = self.ask_date()?;
                let form = PaymentForm {
                    id,
                    patient,
                    visit_id,
                    amount,
                    date,
                };
                payments::add_payment(form, self.state).map(|_| ())
            }
        };
        self.report(result, &format!("{} added", kind.singular()))
    }

    fn edit(&mut self, kind: EntityKind) -> io::Result<()> {
        let Some(id) = self.select_record(kind, "edit")? else {
            return Ok(());
        };
        let result = match kind {
            EntityKind::Doctor => self.edit_doctor(&id)?,
            EntityKind::Patient => self.edit_patient(&id)?,
            EntityKind::Appointment => self.edit_appointment(&id)?,
            EntityKind::Visit => self.edit_visit(&id)?,
            EntityKind::Prescription => self.edit_prescription(&id)?,
            EntityKind::Payment => self.edit_payment(&id)?,
        };
        self.report(result, &format!("{} updated", kind.singular()))
    }

    fn delete(&mut self, kind: EntityKind) -> io::Result<()> {
        let Some(id) = self.select_record(kind, "delete")? else {
            return Ok(());
        };
        let state = self.state;
        let result = match kind {
            EntityKind::Doctor => doctors::delete_doctor(&id, state).map(|_| ()),
            EntityKind::Patient => patients::delete_patient(&id, state).map(|_| ()),
            EntityKind::Appointment => appointments::delete_appointment(&id, state).map(|_| ()),
            EntityKind::Visit => visits::delete_visit(&id, state).map(|_| ()),
            EntityKind::Prescription => prescriptions::delete_prescription(&id, state).map(|_| ()),
            EntityKind::Payment => payments::delete_payment(&id, state).map(|_| ()),
        };
        self.report(result, "Deleted")
    }

    // ── Edit forms ──────────────────────────────────────────
    // Blank input keeps the current value; `-` empties free-text fields.

    fn edit_doctor(&mut self, id: &str) -> io::Result<Result<(), String>> {
        let current = match doctors::get_doctor(id, self.state) {
            Ok(d) => d,
            Err(e) => return Ok(Err(e)),
        };
        let patch = DoctorPatch {
            id: self.ask_keep("ID", &current.id)?,
            name: self.ask_keep("Name", &current.name)?,
            specialty: self.ask_keep("Specialty", &current.specialty)?,
        };
        Ok(doctors::update_doctor(id, patch, self.state).map(|_| ()))
    }

    fn edit_patient(&mut self, id: &str) -> io::Result<Result<(), String>> {
        let current = match patients::get_patient(id, self.state) {
            Ok(p) => p,
            Err(e) => return Ok(Err(e)),
        };
        let patch = PatientPatch {
            id: self.ask_keep("ID", &current.id)?,
            name: self.ask_keep("Name", &current.name)?,
            age: self.ask_keep_bounded("Age", current.age, MIN_AGE, MAX_AGE)?,
        };
        Ok(patients::update_patient(id, patch, self.state).map(|_| ()))
    }

    fn edit_appointment(&mut self, id: &str) -> io::Result<Result<(), String>> {
        let current = match appointments::get_appointment(id, self.state) {
            Ok(a) => a,
            Err(e) => return Ok(Err(e)),
        };
        let patch = AppointmentPatch {
            date: self.ask_keep("Date", &current.date)?,
            patient: self.ask_keep("Patient", &current.patient)?,
            doctor: self.ask_keep("Doctor", &current.doctor)?,
        };
        Ok(appointments::update_appointment(id, patch, self.state).map(|_| ()))
    }

    fn edit_visit(&mut self, id: &str) -> io::Result<Result<(), String>> {
        let current = match visits::get_visit(id, self.state) {
            Ok(v) => v,
            Err(e) => return Ok(Err(e)),
        };
        let patch = VisitPatch {
            diagnosis: self.ask_keep_text("Diagnosis", &current.diagnosis)?,
        };
        Ok(visits::update_visit(id, patch, self.state).map(|_| ()))
    }

    fn edit_prescription(&mut self, id: &str) -> io::Result<Result<(), String>> {
        let current = match prescriptions::get_prescription(id, self.state) {
            Ok(r) => r,
            Err(e) => return Ok(Err(e)),
        };
        let patch = PrescriptionPatch {
            medications: self.ask_keep_text("Medicines", &current.medications)?,
            notes: self.ask_keep_text("Notes", &current.notes)?,
        };
        Ok(prescriptions::update_prescription(id, patch, self.state).map(|_| ()))
    }

    fn edit_payment(&mut self, id: &str) -> io::Result<Result<(), String>> {
        let current = match payments::get_payment(id, self.state) {
            Ok(p) => p,
            Err(e) => return Ok(Err(e)),
        };
        let patch = PaymentPatch {
            amount: self.ask_keep_bounded("Amount", current.amount, MIN_AMOUNT, f64::MAX)?,
            date: self.ask_keep("Date", &current.date)?,
        };
        Ok(payments::update_payment(id, patch, self.state).map(|_| ()))
    }

    // ── Widgets ─────────────────────────────────────────────

    /// One line of input without its line ending. EOF is `UnexpectedEof`.
    fn ask(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, "input closed"));
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Blank input yields `None`.
    fn ask_keep(&mut self, label: &str, current: &str) -> io::Result<Option<String>> {
        let answer = self.ask(&format!("{label} [{current}]"))?;
        Ok(if answer.trim().is_empty() {
            None
        } else {
            Some(answer)
        })
    }

    /// Like `ask_keep`, but a lone `-` clears the field.
    fn ask_keep_text(&mut self, label: &str, current: &str) -> io::Result<Option<String>> {
        let answer = self.ask_keep(&format!("{label} (- to clear)"), current)?;
        Ok(match answer {
            Some(a) if a.trim() == CLEAR_FIELD => Some(String::new()),
            other => other,
        })
    }

    fn ask_date(&mut self) -> io::Result<Option<String>> {
        let answer = self.ask("Date (YYYY-MM-DD, blank for today)")?;
        Ok(Some(answer))
    }

    /// Number input clamped to `[min, max]`; blank takes `default`.
    fn ask_bounded<T>(&mut self, label: &str, min: T, max: T, default: T) -> io::Result<T>
    where
        T: FromStr + PartialOrd + Display + Copy,
    {
        loop {
            let answer = self.ask(label)?;
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(default);
            }
            match answer.parse::<T>() {
                Ok(v) if v >= min && v <= max => return Ok(v),
                _ => writeln!(self.output, "{label} must be between {min} and {max}")?,
            }
        }
    }

    fn ask_keep_bounded<T>(
        &mut self,
        label: &str,
        current: T,
        min: T,
        max: T,
    ) -> io::Result<Option<T>>
    where
        T: FromStr + PartialOrd + Display + Copy,
    {
        loop {
            let answer = self.ask(&format!("{label} [{current}]"))?;
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(None);
            }
            match answer.parse::<T>() {
                Ok(v) if v >= min && v <= max => return Ok(Some(v)),
                _ => writeln!(self.output, "{label} is out of range")?,
            }
        }
    }

    /// Name of the chosen option, or free text when there is nothing to choose.
    fn pick(
        &mut self,
        label: &str,
        options: Result<Vec<SelectOption>, String>,
    ) -> io::Result<String> {
        let options = options.unwrap_or_default();
        if options.is_empty() {
            let typed = self.ask(label)?;
            return Ok(label_name(&typed).to_string());
        }
        self.list_options(&options)?;
        loop {
            let answer = self.ask(&format!("{label} #"))?;
            match parse_index(&answer, options.len()) {
                Some(i) => return Ok(options[i].name.clone()),
                None => writeln!(self.output, "Invalid choice")?,
            }
        }
    }

    /// Identifier of the record chosen for `action`, if any.
    fn select_record(&mut self, kind: EntityKind, action: &str) -> io::Result<Option<String>> {
        let options = match self.options_for(kind) {
            Ok(o) => o,
            Err(e) => {
                writeln!(self.output, "Error: {e}")?;
                return Ok(None);
            }
        };
        if options.is_empty() {
            writeln!(self.output, "No {} to {action}", kind.as_str())?;
            return Ok(None);
        }
        self.list_options(&options)?;
        let answer = self.ask(&format!(
            "Select {} to {action}",
            kind.singular().to_lowercase()
        ))?;
        match parse_index(&answer, options.len()) {
            Some(i) => Ok(Some(options[i].id.clone())),
            None => {
                writeln!(self.output, "Invalid choice")?;
                Ok(None)
            }
        }
    }

    fn options_for(&self, kind: EntityKind) -> Result<Vec<SelectOption>, String> {
        match kind {
            EntityKind::Doctor => doctors::doctor_options(self.state),
            EntityKind::Patient => patients::patient_options(self.state),
            EntityKind::Appointment => appointments::appointment_options(self.state),
            EntityKind::Visit => visits::visit_options(self.state),
            EntityKind::Prescription => prescriptions::prescription_options(self.state),
            EntityKind::Payment => payments::payment_options(self.state),
        }
    }

    fn list_options(&mut self, options: &[SelectOption]) -> io::Result<()> {
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, option.label)?;
        }
        Ok(())
    }

    fn show<T: Serialize>(&mut self, rows: Result<Vec<T>, String>, empty: &str) -> io::Result<()> {
        match rows {
            Ok(rows) if rows.is_empty() => writeln!(self.output, "{empty}"),
            Ok(rows) => write!(self.output, "{}", render_table(&rows)),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn report(&mut self, result: Result<(), String>, success: &str) -> io::Result<()> {
        match result {
            Ok(()) => writeln!(self.output, "{success}"),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }
}
