// Course management commands

use anyhow::Result;
use clap::Subcommand;
use polis_client::{ApiClient, HttpGateway};
use polis_contracts::Course;
use polis_core::{EntityGateway, ListState};

use crate::commands::{listing, user_error};
use crate::output::{print_field, OutputFormat, Table};

#[derive(Subcommand)]
pub enum CoursesCommand {
    /// List courses, optionally filtered
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

    /// Get a course by id
    Get {
        /// Course id
        id: i64,
    },

    /// Create (no --id) or update (--id) a course
    Upsert {
        #[arg(long)]
        id: Option<i64>,

        #[arg(long)]
        title: String,

        /// Course code, e.g. "PHY-101"
        #[arg(long)]
        code: String,

        #[arg(long)]
        description: Option<String>,

        /// Curriculum year
        #[arg(long)]
        year: Option<i32>,
    },

    /// Delete a course by id
    Delete {
        /// Course id
        id: i64,
    },
}

pub async fn run(
    command: CoursesCommand,
    client: &ApiClient,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let gateway = HttpGateway::<Course>::new(client.clone());
    match command {
        CoursesCommand::List {
            search,
            pages,
            page_size,
        } => {
            let state = listing::fetch_pages(gateway, search, pages, page_size).await?;
            print_list(&state, output);
            Ok(())
        }
        CoursesCommand::Search { page_size } => {
            listing::interactive_search(gateway, page_size, move |state| print_list(state, output))
                .await
        }
        CoursesCommand::Get { id } => {
            let course = gateway.get(id).await.map_err(user_error)?;
            if output.is_text() {
                print_course(&course);
            } else {
                output.print_value(&course);
            }
            Ok(())
        }
        CoursesCommand::Upsert {
            id,
            title,
            code,
            description,
            year,
        } => {
            let course = Course {
                id,
                title,
                code,
                description,
                year,
                teacher: None,
                students: Vec::new(),
            };
            let saved = gateway.upsert(&course).await.map_err(user_error)?;
            if output.is_text() {
                if quiet {
                    println!("{}", saved.id.unwrap_or_default());
                } else {
                    println!("Saved course: {}", saved.id.unwrap_or_default());
                    print_field("Title", &saved.title);
                    print_field("Code", &saved.code);
                }
            } else {
                output.print_value(&saved);
            }
            Ok(())
        }
        CoursesCommand::Delete { id } => {
            gateway.delete(id).await.map_err(user_error)?;
            if output.is_text() && !quiet {
                println!("Deleted course: {}", id);
            }
            Ok(())
        }
    }
}

fn print_list(state: &ListState<Course>, output: OutputFormat) {
    if !output.is_text() {
        output.print_value(&state.items);
        return;
    }
    if let Some(error) = &state.error {
        println!("Error: {}", error);
        return;
    }
    if state.items.is_empty() {
        println!("No courses found");
        return;
    }

    let table = Table::new(&[("ID", 6), ("TITLE", 28), ("CODE", 10), ("YEAR", 6), ("TEACHER", 22)]);
    for course in &state.items {
        let teacher = course
            .teacher
            .as_ref()
            .map(|teacher| teacher.full_name())
            .unwrap_or_else(|| "-".to_string());
        table.row(&[
            course.id.map(|id| id.to_string()).unwrap_or_default(),
            course.title.clone(),
            course.code.clone(),
            course.year.map(|year| year.to_string()).unwrap_or_default(),
            teacher,
        ]);
    }
    if state.has_next {
        println!("(more available: rerun with --pages {})", state.current_page + 1);
    }
}

fn print_course(course: &Course) {
    print_field(
        "ID",
        &course.id.map(|id| id.to_string()).unwrap_or_else(|| "-".into()),
    );
    print_field("Title", &course.title);
    print_field("Code", &course.code);
    if let Some(description) = &course.description {
        print_field("Description", description);
    }
    if let Some(year) = course.year {
        print_field("Year", &year.to_string());
    }
    if let Some(teacher) = &course.teacher {
        print_field("Teacher", &teacher.full_name());
    }
    if !course.students.is_empty() {
        print_field("Students", &course.students.len().to_string());
    }
}
