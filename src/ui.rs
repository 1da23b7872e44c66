//! Terminal UI utilities.
//!
//! A small auto-sizing table with Unicode box-drawing characters, used by
//! `depstrap status`. Cell widths are measured with ANSI escapes stripped
//! so colored content lines up.

use colored::*;
use console::{measure_text_width, truncate_str};

/// Cells wider than this are truncated with an ellipsis. Long clone URLs
/// would otherwise blow out the table on narrow terminals.
const MAX_CELL_WIDTH: usize = 48;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        if row.len() == self.headers.len() {
            self.rows.push(row);
        }
    }

    pub fn print(&self) {
        if self.headers.is_empty() {
            return;
        }

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let w = measure_text_width(cell).min(MAX_CELL_WIDTH);
                widths[i] = widths[i].max(w);
            }
        }

        let border = |left: &str, mid: &str, right: &str| {
            let mut line = String::from("  ");
            line.push_str(left);
            for (i, w) in widths.iter().enumerate() {
                line.push_str(&"─".repeat(w + 2));
                line.push_str(if i + 1 < widths.len() { mid } else { right });
            }
            line
        };

        println!("{}", border("┌", "┬", "┐"));

        print!("  │");
        for (header, w) in self.headers.iter().zip(&widths) {
            let pad = w.saturating_sub(header.chars().count());
            print!(" {}{} │", header.bold(), " ".repeat(pad));
        }
        println!();
        println!("{}", border("├", "┼", "┤"));

        for row in &self.rows {
            print!("  │");
            for (cell, w) in row.iter().zip(&widths) {
                let shown = truncate_str(cell, *w, "...");
                let pad = w.saturating_sub(measure_text_width(&shown));
                print!(" {}{} │", shown, " ".repeat(pad));
            }
            println!();
        }

        println!("{}", border("└", "┴", "┘"));
    }
}
