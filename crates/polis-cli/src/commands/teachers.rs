// Teacher management commands

use anyhow::Result;
use clap::Subcommand;
use polis_client::{ApiClient, HttpGateway};
use polis_contracts::{Teacher, TeacherCourseLink};
use polis_core::{EntityGateway, ListState};

use crate::commands::{listing, user_error};
use crate::output::{print_field, OutputFormat, Table};

#[derive(Subcommand)]
pub enum TeachersCommand {
    /// List teachers, optionally filtered
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

    /// Get a teacher by id
    Get {
        /// Teacher id
        id: i64,
    },

    /// Create (no --id) or update (--id) a teacher
    Upsert {
        #[arg(long)]
        id: Option<i64>,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        /// Academic title, e.g. "Professor"
        #[arg(long)]
        title: String,
    },

    /// Delete a teacher by id
    Delete {
        /// Teacher id
        id: i64,
    },

    /// Assign a teacher to a course
    Assign {
        #[arg(long)]
        teacher: i64,

        #[arg(long)]
        course: i64,
    },

    /// Remove a teacher from a course
    Unassign {
        #[arg(long)]
        teacher: i64,

        #[arg(long)]
        course: i64,
    },
}

pub async fn run(
    command: TeachersCommand,
    client: &ApiClient,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let gateway = HttpGateway::<Teacher>::new(client.clone());
    match command {
        TeachersCommand::List {
            search,
            pages,
            page_size,
        } => {
            let state = listing::fetch_pages(gateway, search, pages, page_size).await?;
            print_list(&state, output);
            Ok(())
        }
        TeachersCommand::Search { page_size } => {
            listing::interactive_search(gateway, page_size, move |state| print_list(state, output))
                .await
        }
        TeachersCommand::Get { id } => {
            let teacher = gateway.get(id).await.map_err(user_error)?;
            if output.is_text() {
                print_teacher(&teacher);
            } else {
                output.print_value(&teacher);
            }
            Ok(())
        }
        TeachersCommand::Upsert {
            id,
            first_name,
            last_name,
            title,
        } => {
            let teacher = Teacher {
                id,
                first_name,
                last_name,
                title,
                courses: Vec::new(),
            };
            let saved = gateway.upsert(&teacher).await.map_err(user_error)?;
            if output.is_text() {
                if quiet {
                    println!("{}", saved.id.unwrap_or_default());
                } else {
                    println!("Saved teacher: {}", saved.id.unwrap_or_default());
                    print_field("Name", &saved.full_name());
                    print_field("Title", &saved.title);
                }
            } else {
                output.print_value(&saved);
            }
            Ok(())
        }
        TeachersCommand::Delete { id } => {
            gateway.delete(id).await.map_err(user_error)?;
            if output.is_text() && !quiet {
                println!("Deleted teacher: {}", id);
            }
            Ok(())
        }
        TeachersCommand::Assign { teacher, course } => {
            client
                .associate_teacher_to_course(TeacherCourseLink {
                    id_teacher: teacher,
                    id_course: course,
                })
                .await
                .map_err(user_error)?;
            if output.is_text() && !quiet {
                println!("Assigned teacher {} to course {}", teacher, course);
            }
            Ok(())
        }
        TeachersCommand::Unassign { teacher, course } => {
            client
                .remove_teacher_from_course(TeacherCourseLink {
                    id_teacher: teacher,
                    id_course: course,
                })
                .await
                .map_err(user_error)?;
            if output.is_text() && !quiet {
                println!("Removed teacher {} from course {}", teacher, course);
            }
            Ok(())
        }
    }
}

fn print_list(state: &ListState<Teacher>, output: OutputFormat) {
    if !output.is_text() {
        output.print_value(&state.items);
        return;
    }
    if let Some(error) = &state.error {
        println!("Error: {}", error);
        return;
    }
    if state.items.is_empty() {
        println!("No teachers found");
        return;
    }

    let table = Table::new(&[("ID", 6), ("NAME", 26), ("TITLE", 20), ("COURSES", 24)]);
    for teacher in &state.items {
        let courses = if teacher.courses.is_empty() {
            "-".to_string()
        } else {
            teacher
                .courses
                .iter()
                .map(|course| course.code.clone())
                .collect::<Vec<_>>()
                .join(", ")
        };
        table.row(&[
            teacher.id.map(|id| id.to_string()).unwrap_or_default(),
            teacher.full_name(),
            teacher.title.clone(),
            courses,
        ]);
    }
    if state.has_next {
        println!("(more available: rerun with --pages {})", state.current_page + 1);
    }
}

fn print_teacher(teacher: &Teacher) {
    print_field(
        "ID",
        &teacher.id.map(|id| id.to_string()).unwrap_or_else(|| "-".into()),
    );
    print_field("Name", &teacher.full_name());
    print_field("Title", &teacher.title);
    if !teacher.courses.is_empty() {
        let courses = teacher
            .courses
            .iter()
            .map(|course| format!("{} ({})", course.title, course.code))
            .collect::<Vec<_>>()
            .join(", ");
        print_field("Courses", &courses);
    }
}
