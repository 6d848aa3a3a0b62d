include!("../../lib.rs");
use std::io::{self, BufRead, Write};
use clap::Parser;
use tracing::{info, warn};
use crate::books::domain::model::BookEntity;
use crate::catalog::command::add_book_cmd::AddBookCommandRequest;
use crate::checkout::command::checkout_book_cmd::CheckoutBookCommandRequest;
use crate::checkout::command::return_book_cmd::ReturnBookCommandRequest;
use crate::core::context::{AppState, ConsoleResult};
use crate::core::domain::Configuration;
use crate::core::library::{LibraryResult, SearchType};
use crate::utils::logs::setup_tracing;

/// Interactive library catalog: books, members, loans and statistics.
#[derive(Parser, Debug)]
#[command(name = "catalog", version, about)]
struct Cli {
    /// Name of the library
    #[arg(long)]
    name: Option<String>,

    /// Preload five books, five members and three loans
    #[arg(long)]
    sample: bool,

    /// Run the scripted demo against the sample library and exit
    #[arg(long)]
    demo: bool,

    /// Log info level events
    #[arg(long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

const MENU: &str = "
 1. List books          2. Search books
 3. Add book            4. List members
 5. Register member     6. Member loans
 7. Borrow book         8. Return book
 9. Statistics         10. Recent history
11. Book details        0. Exit";

#[tokio::main(flavor = "current_thread")]
async fn main() -> LibraryResult<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose, cli.json_logs);

    let name = cli.name.unwrap_or_else(|| Configuration::default().library_name);
    if cli.demo {
        return run_demo(&AppState::with_sample(name.as_str())?).await;
    }
    let state = if cli.sample {
        AppState::with_sample(name.as_str())?
    } else {
        AppState::new(name.as_str())
    };
    info!(name = name.as_str(), sample = cli.sample, "starting catalog");
    run_menu(&state).await
}

fn show(res: ConsoleResult) {
    match res {
        Ok(out) => print!("{}", out),
        Err(err) => println!("{}", err),
    }
}

// prompt returns None once stdin is closed
fn prompt(input: &mut impl BufRead, label: &str) -> LibraryResult<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

async fn run_demo(state: &AppState) -> LibraryResult<()> {
    print!("{}", reports::render_library_banner(state.config.library_name.as_str()));
    show(catalog::controller::list_books(state).await);
    println!();
    show(members::controller::list_members(state).await);
    println!();
    show(catalog::controller::statistics(state).await);
    println!();
    for keyword in ["Python", "周志华"] {
        show(catalog::controller::search_books(state, keyword, None).await);
    }
    println!();
    show(checkout::controller::recent_history(state, state.config.history_limit).await);
    println!();
    show(members::controller::member_books(state, "张三").await);
    Ok(())
}

async fn run_menu(state: &AppState) -> LibraryResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    print!("{}", reports::render_library_banner(state.config.library_name.as_str()));
    loop {
        println!("{}", MENU);
        let choice = match prompt(&mut input, "> ")? {
            Some(choice) => choice,
            None => return Ok(()),
        };
        if !run_choice(state, &mut input, choice.as_str()).await? {
            return Ok(());
        }
    }
}

// run_choice executes one menu entry; it returns false when the user asked to exit or
// stdin was closed mid-entry.
async fn run_choice(state: &AppState, input: &mut impl BufRead, choice: &str) -> LibraryResult<bool> {
    match choice {
        "0" => {
            println!("Bye.");
            return Ok(false);
        }
        "1" => show(catalog::controller::list_books(state).await),
        "2" => {
            let Some(keyword) = prompt(input, "Keyword: ")? else { return Ok(false) };
            let Some(mode) = prompt(input, "Search in (title/author/all, empty for both): ")? else { return Ok(false) };
            if keyword.is_empty() {
                println!("Nothing to search for.");
                return Ok(true);
            }
            let search_type = optional(mode).map(SearchType::from);
            show(catalog::controller::search_books(state, keyword.as_str(), search_type).await);
        }
        "3" => {
            let Some(title) = prompt(input, "Title: ")? else { return Ok(false) };
            let Some(author) = prompt(input, "Author: ")? else { return Ok(false) };
            let Some(isbn) = prompt(input, "ISBN: ")? else { return Ok(false) };
            let Some(publisher) = prompt(input, "Publisher: ")? else { return Ok(false) };
            let Some(year) = prompt(input, "Year: ")? else { return Ok(false) };
            let Some(copies) = prompt(input, "Copies: ")? else { return Ok(false) };
            if !BookEntity::is_valid_isbn(isbn.as_str()) {
                warn!(isbn = isbn.as_str(), "isbn does not look valid");
                println!("! '{}' does not look like an ISBN-10 or ISBN-13, adding it anyway", isbn);
            }
            let req = AddBookCommandRequest::new(title.as_str(), author.as_str(), isbn.as_str())
                .with_details(optional(publisher), year.parse().ok(), copies.parse().ok());
            show(catalog::controller::add_book(state, req).await);
        }
        "4" => show(members::controller::list_members(state).await),
        "5" => {
            let Some(name) = prompt(input, "Member name: ")? else { return Ok(false) };
            show(members::controller::register_member(state, name.as_str()).await);
        }
        "6" => {
            let Some(name) = prompt(input, "Member name: ")? else { return Ok(false) };
            show(members::controller::member_books(state, name.as_str()).await);
        }
        "7" => {
            let Some(isbn) = prompt(input, "ISBN: ")? else { return Ok(false) };
            let Some(name) = prompt(input, "Member name: ")? else { return Ok(false) };
            if isbn.is_empty() || name.is_empty() {
                println!("ISBN and member name are both required.");
                return Ok(true);
            }
            show(checkout::controller::checkout_book(state, CheckoutBookCommandRequest::new(isbn, name)).await);
        }
        "8" => {
            let Some(isbn) = prompt(input, "ISBN: ")? else { return Ok(false) };
            let Some(name) = prompt(input, "Member name: ")? else { return Ok(false) };
            if isbn.is_empty() || name.is_empty() {
                println!("ISBN and member name are both required.");
                return Ok(true);
            }
            show(checkout::controller::return_book(state, ReturnBookCommandRequest::new(isbn, name)).await);
        }
        "9" => show(catalog::controller::statistics(state).await),
        "10" => {
            let Some(limit) = prompt(input, "How many records (default 10): ")? else { return Ok(false) };
            let limit = limit.parse().unwrap_or(state.config.history_limit);
            show(checkout::controller::recent_history(state, limit).await);
        }
        "11" => {
            let Some(isbn) = prompt(input, "ISBN: ")? else { return Ok(false) };
            if !isbn.is_empty() {
                show(catalog::controller::find_book_by_isbn(state, isbn.as_str()).await);
            }
        }
        other => println!("Unknown choice '{}', pick 0-11.", other),
    }
    Ok(true)
}
