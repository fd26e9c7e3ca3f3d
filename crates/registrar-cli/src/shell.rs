//! Interactive menu shell
//!
//! A numbered menu over a [`Registry`], reading one value per input line.
//! Engine outcomes, including failures, are rendered as text and the loop
//! carries on; only I/O failures end it early. End of input behaves like
//! choosing exit.

use std::io::{BufRead, Write};
use std::str::FromStr;

use registrar_core::{
    Admission, Gpa, NewCourse, ProcessedRequest, Registry, RegistryError, RegistryResult, Replay,
    StudentId, TeardownSummary, TranscriptLine, UndoAction, UndoReport,
};
use tracing::debug;

use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;

/// A menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    AddCourse,
    RequestEnrollment,
    ProcessRequest,
    DropCourse,
    EnterGrade,
    Transcript,
    Undo,
    DisplayCourses,
    ShowWaitlist,
    ShowRequests,
    Exit,
}

impl MenuChoice {
    /// Entries in display order
    pub const ALL: [MenuChoice; 12] = [
        MenuChoice::AddStudent,
        MenuChoice::AddCourse,
        MenuChoice::RequestEnrollment,
        MenuChoice::ProcessRequest,
        MenuChoice::DropCourse,
        MenuChoice::EnterGrade,
        MenuChoice::Transcript,
        MenuChoice::Undo,
        MenuChoice::DisplayCourses,
        MenuChoice::ShowWaitlist,
        MenuChoice::ShowRequests,
        MenuChoice::Exit,
    ];

    /// Look up the entry a user typed
    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.number() == number)
    }

    /// Number shown next to the entry
    pub fn number(self) -> u32 {
        match self {
            MenuChoice::Exit => 0,
            MenuChoice::AddStudent => 1,
            MenuChoice::AddCourse => 2,
            MenuChoice::RequestEnrollment => 3,
            MenuChoice::ProcessRequest => 4,
            MenuChoice::DropCourse => 5,
            MenuChoice::EnterGrade => 6,
            MenuChoice::Transcript => 7,
            MenuChoice::Undo => 8,
            MenuChoice::DisplayCourses => 9,
            MenuChoice::ShowWaitlist => 10,
            MenuChoice::ShowRequests => 11,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddStudent => "Add Student",
            MenuChoice::AddCourse => "Add Course",
            MenuChoice::RequestEnrollment => "Request Enrollment (Enqueue)",
            MenuChoice::ProcessRequest => "Process Next Request (Dequeue)",
            MenuChoice::DropCourse => "Drop Course",
            MenuChoice::EnterGrade => "Enter/Update Grade",
            MenuChoice::Transcript => "Print Transcript & GPA",
            MenuChoice::Undo => "Undo Last Action",
            MenuChoice::DisplayCourses => "Display Courses",
            MenuChoice::ShowWaitlist => "Show Course Waitlist",
            MenuChoice::ShowRequests => "Show Pending Requests",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Menu loop over a registry, generic over its input and output streams
pub struct Shell<R, W> {
    registry: Registry,
    input: R,
    output: W,
    style: OutputStyle,
    show_banner: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Shell with plain output and the title banner
    pub fn new(registry: Registry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
            style: OutputStyle::plain(),
            show_banner: true,
        }
    }

    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user exits or input ends, then release the registry
    pub fn run(&mut self) -> CliResult<TeardownSummary> {
        loop {
            self.print_menu()?;
            let raw = match self.read_field("Choice:") {
                Ok(raw) => raw,
                Err(CliError::EndOfInput) => break,
                Err(err) => return Err(err),
            };
            let Some(choice) = self.parse_choice(&raw)? else {
                continue;
            };
            if choice == MenuChoice::Exit {
                break;
            }

            debug!(?choice, "menu selection");
            match self.dispatch(choice) {
                Ok(()) => {}
                Err(CliError::EndOfInput) => break,
                Err(err @ (CliError::InvalidInput { .. } | CliError::Registry(_))) => {
                    self.say(self.style.error(&err.user_message()))?;
                }
                Err(err) => return Err(err),
            }
        }
        self.shut_down()
    }

    fn dispatch(&mut self, choice: MenuChoice) -> CliResult<()> {
        match choice {
            MenuChoice::AddStudent => self.add_student(),
            MenuChoice::AddCourse => self.add_course(),
            MenuChoice::RequestEnrollment => self.request_enrollment(),
            MenuChoice::ProcessRequest => self.process_request(),
            MenuChoice::DropCourse => self.drop_course(),
            MenuChoice::EnterGrade => self.enter_grade(),
            MenuChoice::Transcript => self.print_transcript(),
            MenuChoice::Undo => self.undo(),
            MenuChoice::DisplayCourses => self.display_courses(),
            MenuChoice::ShowWaitlist => self.show_waitlist(),
            MenuChoice::ShowRequests => self.show_requests(),
            MenuChoice::Exit => Ok(()),
        }
    }

    // ---- menu actions ---------------------------------------------------

    fn add_student(&mut self) -> CliResult<()> {
        let id: StudentId = self.read_parsed("Enter ID:", "a numeric student ID")?;
        let name = self.read_text("Enter Name:")?;
        self.registry.add_student(id, name)?;
        self.say(self.style.success("Student added successfully."))
    }

    fn add_course(&mut self) -> CliResult<()> {
        let id = self.read_text("Enter Course ID:")?;
        let name = self.read_text("Enter Name:")?;
        let credits = self.read_positive("Enter Credits:", "credits")?;
        let capacity = self.read_positive("Enter Capacity:", "capacity")?;
        self.registry
            .add_course(NewCourse::new(id, name, credits, capacity))?;
        self.say(self.style.success("Course added successfully."))
    }

    fn request_enrollment(&mut self) -> CliResult<()> {
        let student_id = self.read_student_id()?;
        let course_id = self.read_text("Course ID:")?;
        let pending = self.registry.enqueue_request(student_id, course_id.clone());
        self.say(self.style.info(&format!(
            "Request queued: Student {} -> Course {} ({} pending)",
            student_id, course_id, pending
        )))
    }

    fn process_request(&mut self) -> CliResult<()> {
        match self.registry.process_next_request() {
            Ok(ProcessedRequest { request, outcome }) => {
                self.say(self.style.info(&format!("Processing request: {}", request)))?;
                self.report_admission(request.student_id, &request.course_id, outcome)
            }
            Err(RegistryError::QueueEmpty) => {
                self.say(self.style.warning("Queue is empty. No requests to process."))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn report_admission(
        &mut self,
        student_id: StudentId,
        course_id: &str,
        outcome: RegistryResult<Admission>,
    ) -> CliResult<()> {
        match outcome? {
            Admission::Enrolled => self.say(self.style.success(&format!(
                "Enrolled Student {} in {}",
                student_id, course_id
            ))),
            Admission::Waitlisted { position } => self.say(self.style.warning(&format!(
                "Course {} is FULL! Student {} added to the waitlist (position {}).",
                course_id, student_id, position
            ))),
        }
    }

    fn drop_course(&mut self) -> CliResult<()> {
        let student_id = self.read_student_id()?;
        let course_id = self.read_text("Course ID:")?;
        self.registry.drop_course(student_id, &course_id)?;
        self.say(self.style.success(&format!(
            "Course {} dropped for Student {}",
            course_id, student_id
        )))
    }

    fn enter_grade(&mut self) -> CliResult<()> {
        let student_id = self.read_student_id()?;
        let course_id = self.read_text("Course ID:")?;
        let grade: f64 = self.read_parsed("New Grade:", "a numeric grade")?;
        if !grade.is_finite() {
            return Err(CliError::invalid_input(format!("grade must be a finite number, got {}", grade)));
        }

        let prior = self.registry.enter_grade(student_id, &course_id, grade)?;
        let message = match prior {
            Some(prior) => format!("Grade updated successfully (was {}).", prior),
            None => "Grade updated successfully.".to_string(),
        };
        self.say(self.style.success(&message))
    }

    fn print_transcript(&mut self) -> CliResult<()> {
        let student_id = self.read_student_id()?;
        let lines = {
            let report = self.registry.student_report(student_id)?;
            let mut lines = vec![self.style.header(&format!(
                "=== Transcript for {} ({}) ===",
                report.student.name(),
                report.student.id()
            ))];
            if report.lines.is_empty() {
                lines.push(self.style.muted(" (no enrollments)"));
            }
            lines.extend(report.lines.iter().map(transcript_line_text));
            lines.push(match report.gpa {
                Gpa::Graded { .. } => format!(">>> Cumulative GPA: {}", report.gpa),
                Gpa::NoGradedCredits => format!(">>> GPA: {}", report.gpa),
            });
            lines
        };
        self.say_all(lines)
    }

    fn undo(&mut self) -> CliResult<()> {
        let UndoReport { action, replay } = match self.registry.undo_last_action() {
            Ok(report) => report,
            Err(RegistryError::NothingToUndo) => {
                return self.say(self.style.warning("Undo Stack is empty."));
            }
            Err(err) => return Err(err.into()),
        };

        match replay {
            Ok(replay) => self.say(self.style.success(&format!(
                "Undid {}: {}",
                action.kind,
                describe_replay(&action, replay)
            ))),
            Err(err) => self.say(self.style.error(&format!(
                "Undo of {} for Student {} in {} could not be replayed: {}",
                action.kind, action.student_id, action.course_id, err
            ))),
        }
    }

    fn display_courses(&mut self) -> CliResult<()> {
        let mut lines = vec![self.style.section("Courses List (Forward)")];
        lines.extend(self.registry.courses_forward().map(|course| course.to_string()));
        if self.registry.catalog().is_empty() {
            lines.push(self.style.muted("(no courses)"));
        }

        lines.push(self.style.section("Courses List (Backward)"));
        lines.extend(
            self.registry
                .courses_backward()
                .map(|course| format!("[{}] {}", course.id(), course.name())),
        );
        self.say_all(lines)
    }

    fn show_waitlist(&mut self) -> CliResult<()> {
        let course_id = self.read_text("Course ID:")?;
        let mut lines = vec![self.style.section(&format!("Waitlist for {}", course_id))];
        let ring = self.registry.waitlist(&course_id)?;
        if ring.is_empty() {
            lines.push(self.style.muted("(empty)"));
        }
        lines.extend(
            ring.iter()
                .enumerate()
                .map(|(index, entry)| format!("{}. Student {}", index + 1, entry.student_id)),
        );
        self.say_all(lines)
    }

    fn show_requests(&mut self) -> CliResult<()> {
        let mut lines = vec![self.style.section("Pending Requests")];
        lines.extend(
            self.registry
                .pending_requests()
                .enumerate()
                .map(|(index, request)| format!("{}. {}", index + 1, request)),
        );
        if lines.len() == 1 {
            lines.push(self.style.muted("(no pending requests)"));
        }
        self.say_all(lines)
    }

    fn shut_down(&mut self) -> CliResult<TeardownSummary> {
        self.say("Exiting system...")?;
        Ok(self.registry.clean_up())
    }

    // ---- input ----------------------------------------------------------

    fn print_menu(&mut self) -> CliResult<()> {
        let mut lines = Vec::with_capacity(MenuChoice::ALL.len() + 4);
        if self.show_banner {
            let rule = "=".repeat(40);
            lines.push(String::new());
            lines.push(rule.clone());
            lines.push(self.style.header("      University Management System      "));
            lines.push(rule);
        }
        lines.extend(
            MenuChoice::ALL
                .iter()
                .map(|choice| format!("{}. {}", choice.number(), choice.label())),
        );
        self.say_all(lines)
    }

    fn parse_choice(&mut self, raw: &str) -> CliResult<Option<MenuChoice>> {
        match raw.parse::<u32>() {
            Ok(number) => match MenuChoice::from_number(number) {
                Some(choice) => Ok(Some(choice)),
                None => {
                    self.say(self.style.warning("Invalid choice, please try again."))?;
                    Ok(None)
                }
            },
            Err(_) => {
                self.say(self.style.error(&format!(
                    "Please enter a menu number, got '{}'",
                    raw
                )))?;
                Ok(None)
            }
        }
    }

    /// Prompt and read one trimmed line
    fn read_field(&mut self, label: &str) -> CliResult<String> {
        write!(self.output, "{}", self.style.prompt(label))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    fn read_parsed<T: FromStr>(&mut self, label: &str, expected: &str) -> CliResult<T> {
        let raw = self.read_field(label)?;
        raw.parse()
            .map_err(|_| CliError::invalid_input(format!("expected {}, got '{}'", expected, raw)))
    }

    fn read_text(&mut self, label: &str) -> CliResult<String> {
        let raw = self.read_field(label)?;
        if raw.is_empty() {
            return Err(CliError::invalid_input(format!(
                "{} must not be empty",
                label.trim_end_matches(':')
            )));
        }
        Ok(raw)
    }

    fn read_positive(&mut self, label: &str, what: &str) -> CliResult<u32> {
        let value: u32 = self.read_parsed(label, "a whole number")?;
        if value == 0 {
            return Err(CliError::invalid_input(format!("{} must be greater than 0", what)));
        }
        Ok(value)
    }

    fn read_student_id(&mut self) -> CliResult<StudentId> {
        self.read_parsed("Student ID:", "a numeric student ID")
    }

    // ---- output ---------------------------------------------------------

    fn say(&mut self, line: impl AsRef<str>) -> CliResult<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    fn say_all(&mut self, lines: Vec<String>) -> CliResult<()> {
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }
}

fn grade_text(grade: Option<f64>) -> String {
    grade.map_or_else(|| "N/A".to_string(), |grade| grade.to_string())
}

fn transcript_line_text(line: &TranscriptLine<'_>) -> String {
    let course = match (line.course_name, line.credits) {
        (Some(name), Some(credits)) => format!("{} ({} cr)", name, credits),
        _ => "course no longer listed".to_string(),
    };
    format!(
        " - Course: {} | Grade: {} | {}",
        line.course_id,
        grade_text(line.grade),
        course
    )
}

fn describe_replay(action: &UndoAction, replay: Replay) -> String {
    match replay {
        Replay::Dropped => format!(
            "Student {} removed from {}",
            action.student_id, action.course_id
        ),
        Replay::Readmitted {
            admission: Admission::Enrolled,
            restored_grade,
        } => match restored_grade {
            Some(grade) => format!(
                "Student {} re-enrolled in {} with grade {}",
                action.student_id, action.course_id, grade
            ),
            None => format!(
                "Student {} re-enrolled in {}",
                action.student_id, action.course_id
            ),
        },
        Replay::Readmitted {
            admission: Admission::Waitlisted { position },
            ..
        } => format!(
            "{} is full; Student {} waitlisted at position {}",
            action.course_id, action.student_id, position
        ),
        Replay::GradeRestored { grade } => format!(
            "Grade for Student {} in {} restored to {}",
            action.student_id,
            action.course_id,
            grade_text(grade)
        ),
    }
}
