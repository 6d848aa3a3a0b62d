use std::fmt::Write;
use crate::books::dto::BookDto;
use crate::catalog::domain::model::LibraryStatistics;
use crate::core::events::HistoryRecord;
use crate::members::dto::MemberDto;
use crate::utils::date::format_date;

const TITLE_WIDTH: usize = 24;
const AUTHOR_WIDTH: usize = 14;
const RULE: &str = "------------------------------------------------------------------------";

// truncate cuts by char so multi-byte titles never split inside a code point
fn borrowers(book: &BookDto) -> String {
    let borrowers = book.borrowers();
    if borrowers.is_empty() { "none".to_string() } else { borrowers.join(", ") }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

pub(crate) fn render_library_banner(name: &str) -> String {
    format!("{}\n  {}\n{}\n", RULE, name, RULE)
}

pub(crate) fn render_books(books: &[BookDto]) -> String {
    if books.is_empty() {
        return "No books in the catalog yet.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "{:<20} {:<24} {:<14} {:>9}  {}", "ISBN", "Title", "Author", "Available", "Borrowers");
    let _ = writeln!(out, "{}", RULE);
    for book in books {
        let _ = writeln!(out, "{:<20} {:<24} {:<14} {:>9}  {}",
                         book.isbn,
                         truncate(book.title.as_str(), TITLE_WIDTH),
                         truncate(book.author.as_str(), AUTHOR_WIDTH),
                         format!("{}/{}", book.available_copies, book.total_copies),
                         borrowers(book));
    }
    let _ = writeln!(out, "{} titles", books.len());
    out
}

pub(crate) fn render_search_results(keyword: &str, books: &[BookDto]) -> String {
    if books.is_empty() {
        return format!("No books match '{}'.\n", keyword);
    }
    let mut out = format!("{} result(s) for '{}':\n", books.len(), keyword);
    for book in books {
        let _ = writeln!(out, "  《{}》 - {} [{}] (available: {}/{})",
                         book.title, book.author, book.isbn, book.available_copies, book.total_copies);
        let _ = writeln!(out, "    borrowers: {}", borrowers(book));
    }
    out
}

pub(crate) fn render_book(book: &BookDto) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "《{}》 - {}", book.title, book.author);
    let _ = writeln!(out, "  ISBN:      {}", book.isbn);
    let _ = writeln!(out, "  Publisher: {} ({})", book.publisher, book.year);
    let _ = writeln!(out, "  Copies:    {}/{} available, {}", book.available_copies, book.total_copies, book.book_status);
    for record in &book.borrow_records {
        let _ = writeln!(out, "  - {} since {}", record.borrower, format_date(record.borrow_date));
    }
    out
}

pub(crate) fn render_members(members: &[MemberDto]) -> String {
    if members.is_empty() {
        return "No members registered yet.\n".to_string();
    }
    let mut out = format!("{} member(s):\n", members.len());
    for member in members {
        let _ = writeln!(out, "  {} ({} borrowed)", member.name, member.borrowed_count);
    }
    out
}

pub(crate) fn render_member_books(member: &str, books: &[BookDto]) -> String {
    if books.is_empty() {
        return format!("{} has no borrowed books.\n", member);
    }
    let mut out = format!("{} has borrowed {} book(s):\n", member, books.len());
    for book in books {
        let since = book.borrow_records.iter()
            .find(|r| r.borrower == member)
            .map(|r| format_date(r.borrow_date))
            .unwrap_or_default();
        let _ = writeln!(out, "  《{}》 - {} (since {})", book.title, book.author, since);
    }
    out
}

pub(crate) fn render_history(history: &[HistoryRecord]) -> String {
    if history.is_empty() {
        return "No borrowing history yet.\n".to_string();
    }
    let mut out = String::new();
    for record in history {
        let _ = writeln!(out, "  {} {:<6} 《{}》 {}",
                         format_date(record.date), record.action.to_string(), record.book_title, record.borrower);
    }
    out
}

pub(crate) fn render_statistics(stats: &LibraryStatistics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Titles:           {}", stats.book_titles);
    let _ = writeln!(out, "Total copies:     {}", stats.total_copies);
    let _ = writeln!(out, "Available copies: {}", stats.available_copies);
    let _ = writeln!(out, "Borrowed copies:  {}", stats.borrowed_copies);
    let _ = writeln!(out, "Members:          {}", stats.member_count);
    match stats.utilization_rate {
        Some(rate) => { let _ = writeln!(out, "Utilization:      {:.1}%", rate); }
        None => { let _ = writeln!(out, "Utilization:      n/a"); }
    }
    out
}
