// Output capture and list history for the guide

use crate::memory::heap::NodeHeap;
use crate::memory::list::LinkedList;
use crate::memory::Address;

/// Captured terminal output, tagged with the level that printed it
#[derive(Debug, Clone)]
pub struct Transcript {
    pub lines: Vec<TerminalLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript { lines: Vec::new() }
    }

    /// Print without newline
    pub fn print(&mut self, text: impl Into<String>, level: u32) {
        let text = text.into();
        if let Some(last) = self.lines.last_mut() {
            if last.level == level && !last.text.ends_with('\n') {
                last.text.push_str(&text);
                return;
            }
        }
        self.lines.push(TerminalLine { text, level });
    }

    /// Print followed by a newline
    pub fn println(&mut self, text: impl Into<String>, level: u32) {
        let mut text = text.into();
        text.push('\n');
        self.print(text, level);
    }

    /// Get all lines as a vector of strings
    pub fn get_output(&self) -> Vec<String> {
        split_lines(self.lines.iter())
    }

    /// Lines printed by one level
    pub fn level_output(&self, level: u32) -> Vec<String> {
        split_lines(self.lines.iter().filter(|tl| tl.level == level))
    }

    /// Everything printed so far, newlines included
    pub fn text(&self) -> String {
        self.lines.iter().map(|tl| tl.text.as_str()).collect()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

fn split_lines<'a>(lines: impl Iterator<Item = &'a TerminalLine>) -> Vec<String> {
    lines
        .flat_map(|tl| {
            let mut result: Vec<String> = tl.text.split('\n').map(|s| s.to_string()).collect();
            // Remove trailing empty string if text ended with newline
            if result.last().is_some_and(|s| s.is_empty()) {
                result.pop();
            }
            result
        })
        .collect()
}

/// A chunk of terminal output with the level that produced it
#[derive(Debug, Clone)]
pub struct TerminalLine {
    pub text: String,
    /// Level number; 0 for the opening and closing banners
    pub level: u32,
}

/// State of the linked list after one step of the list level
#[derive(Debug, Clone)]
pub struct ListSnapshot {
    pub label: String,
    pub heap: NodeHeap,
    pub head: Option<Address>,
    pub rendering: String,
}

impl ListSnapshot {
    pub fn capture(label: impl Into<String>, list: &LinkedList) -> Self {
        ListSnapshot {
            label: label.into(),
            heap: list.heap().clone(),
            head: list.head(),
            rendering: list.render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_merges_until_newline() {
        let mut t = Transcript::new();
        t.print("For Loop (1 to 5): ", 2);
        t.print("1 ", 2);
        t.println("2", 2);
        t.println("next", 2);

        assert_eq!(t.get_output(), vec!["For Loop (1 to 5): 1 2", "next"]);
        assert_eq!(t.lines.len(), 2);
    }

    #[test]
    fn test_level_output_filters_by_level() {
        let mut t = Transcript::new();
        t.println("banner", 0);
        t.println("one", 1);
        t.print("two", 2);
        t.print("three", 3);

        assert_eq!(t.level_output(1), vec!["one"]);
        assert_eq!(t.level_output(2), vec!["two"]);
        assert_eq!(t.text(), "banner\none\ntwothree");
    }
}
