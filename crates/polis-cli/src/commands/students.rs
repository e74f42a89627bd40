// Student management commands

use anyhow::Result;
use clap::Subcommand;
use polis_client::{ApiClient, HttpGateway};
use polis_contracts::{Student, StudentCourseLink};
use polis_core::{EntityGateway, ListState};

use crate::commands::{listing, user_error};
use crate::output::{print_field, OutputFormat, Table};

#[derive(Subcommand)]
pub enum StudentsCommand {
    /// List students, optionally filtered
    List {
        /// Free-text filter
        #[arg(long, short)]
        search: Option<String>,

        /// Number of pages to fetch
        #[arg(long, default_value = "1")]
        pages: u32,

        /// Page size
        #[arg(long, default_value = "20")]
        page_size: u32,
    },

    /// Interactive debounced search; reads terms from stdin
    Search {
        /// Page size
        #[arg(long, default_value = "20")]
        page_size: u32,
    },

    /// Get a student by id
    Get {
        /// Student id
        id: i64,
    },

    /// Create (no --id) or update (--id) a student
    Upsert {
        #[arg(long)]
        id: Option<i64>,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Delete a student by id
    Delete {
        /// Student id
        id: i64,
    },

    /// Enroll a student in a course
    Enroll {
        #[arg(long)]
        student: i64,

        #[arg(long)]
        course: i64,
    },

    /// Remove a student from a course
    Withdraw {
        #[arg(long)]
        student: i64,

        #[arg(long)]
        course: i64,
    },
}

pub async fn run(
    command: StudentsCommand,
    client: &ApiClient,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let gateway = HttpGateway::<Student>::new(client.clone());
    match command {
        StudentsCommand::List {
            search,
            pages,
            page_size,
        } => {
            let state = listing::fetch_pages(gateway, search, pages, page_size).await?;
            print_list(&state, output);
            Ok(())
        }
        StudentsCommand::Search { page_size } => {
            listing::interactive_search(gateway, page_size, move |state| print_list(state, output))
                .await
        }
        StudentsCommand::Get { id } => {
            let student = gateway.get(id).await.map_err(user_error)?;
            if output.is_text() {
                print_student(&student);
            } else {
                output.print_value(&student);
            }
            Ok(())
        }
        StudentsCommand::Upsert {
            id,
            first_name,
            last_name,
            email,
            phone,
        } => {
            let student = Student {
                id,
                first_name,
                last_name,
                email,
                phone,
                courses: Vec::new(),
            };
            let saved = gateway.upsert(&student).await.map_err(user_error)?;
            if output.is_text() {
                if quiet {
                    println!("{}", saved.id.unwrap_or_default());
                } else {
                    println!("Saved student: {}", saved.id.unwrap_or_default());
                    print_field("Name", &saved.full_name());
                    print_field("Email", &saved.email);
                }
            } else {
                output.print_value(&saved);
            }
            Ok(())
        }
        StudentsCommand::Delete { id } => {
            gateway.delete(id).await.map_err(user_error)?;
            if output.is_text() && !quiet {
                println!("Deleted student: {}", id);
            }
            Ok(())
        }
        StudentsCommand::Enroll { student, course } => {
            client
                .associate_student_to_course(StudentCourseLink {
                    id_student: student,
                    id_course: course,
                })
                .await
                .map_err(user_error)?;
            if output.is_text() && !quiet {
                println!("Enrolled student {} in course {}", student, course);
            }
            Ok(())
        }
        StudentsCommand::Withdraw { student, course } => {
            client
                .remove_student_from_course(StudentCourseLink {
                    id_student: student,
                    id_course: course,
                })
                .await
                .map_err(user_error)?;
            if output.is_text() && !quiet {
                println!("Removed student {} from course {}", student, course);
            }
            Ok(())
        }
    }
}

fn print_list(state: &ListState<Student>, output: OutputFormat) {
    if !output.is_text() {
        output.print_value(&state.items);
        return;
    }
    if let Some(error) = &state.error {
        println!("Error: {}", error);
        return;
    }
    if state.items.is_empty() {
        println!("No students found");
        return;
    }

    let table = Table::new(&[("ID", 6), ("NAME", 26), ("EMAIL", 30), ("COURSES", 24)]);
    for student in &state.items {
        let courses = if student.courses.is_empty() {
            "-".to_string()
        } else {
            student
                .courses
                .iter()
                .map(|course| course.code.clone())
                .collect::<Vec<_>>()
                .join(", ")
        };
        table.row(&[
            student.id.map(|id| id.to_string()).unwrap_or_default(),
            student.full_name(),
            student.email.clone(),
            courses,
        ]);
    }
    if state.has_next {
        println!("(more available: rerun with --pages {})", state.current_page + 1);
    }
}

fn print_student(student: &Student) {
    print_field(
        "ID",
        &student.id.map(|id| id.to_string()).unwrap_or_else(|| "-".into()),
    );
    print_field("Name", &student.full_name());
    print_field("Email", &student.email);
    if let Some(phone) = &student.phone {
        print_field("Phone", phone);
    }
    if !student.courses.is_empty() {
        let courses = student
            .courses
            .iter()
            .map(|course| format!("{} ({})", course.title, course.code))
            .collect::<Vec<_>>()
            .join(", ");
        print_field("Courses", &courses);
    }
}
