//! Navigation methods for the App.

use super::{App, Focus, Section};

impl App {
    /// Toggle focus between the form and the list.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Form => Focus::List,
            Focus::List => Focus::Form,
        };
    }

    /// Switch to a section, fetching loans on the first visit.
    ///
    /// Books and members are fetched at startup; the loan list is only
    /// needed once the user actually opens the Loans section.
    pub fn switch_section(&mut self, section: Section) {
        self.section = section;
        self.notice = None;
        if section == Section::Loans && !self.loans_requested() {
            self.mark_loans_requested();
            self.refresh_loans();
        }
    }

    /// Switch to the next section in tab order.
    pub fn next_section(&mut self) {
        self.switch_section(self.section.next());
    }

    /// Switch to the previous section in tab order.
    pub fn prev_section(&mut self) {
        self.switch_section(self.section.prev());
    }

    /// Move the list selection up in the current section.
    pub fn move_up(&mut self) {
        let index = self.selected_index_mut();
        if *index > 0 {
            *index -= 1;
        }
    }

    /// Move the list selection down in the current section.
    pub fn move_down(&mut self) {
        let len = match self.section {
            Section::Books => self.books.len(),
            Section::Members => self.members.len(),
            Section::Loans => self.loans.len(),
        };
        let index = self.selected_index_mut();
        if len > 0 && *index < len - 1 {
            *index += 1;
        }
    }

    /// Selected row in the current section.
    pub fn selected_index(&self) -> usize {
        match self.section {
            Section::Books => self.books_index,
            Section::Members => self.members_index,
            Section::Loans => self.loans_index,
        }
    }

    fn selected_index_mut(&mut self) -> &mut usize {
        match self.section {
            Section::Books => &mut self.books_index,
            Section::Members => &mut self.members_index,
            Section::Loans => &mut self.loans_index,
        }
    }

    /// Cycle the loan form's book selection through the book collection.
    pub fn cycle_loan_book(&mut self, delta: isize) {
        let next = cycle_id(
            self.loan_form.book_id.as_deref(),
            self.books.items().iter().map(|b| b.id.as_str()),
            delta,
        );
        self.loan_form.book_id = next;
    }

    /// Cycle the loan form's member selection through the member collection.
    pub fn cycle_loan_member(&mut self, delta: isize) {
        let next = cycle_id(
            self.loan_form.member_id.as_deref(),
            self.members.items().iter().map(|m| m.id.as_str()),
            delta,
        );
        self.loan_form.member_id = next;
    }
}

/// Step a selection forwards or backwards through a list of ids, wrapping.
///
/// With no current selection the first step lands on the first id. If the
/// current id vanished in a refresh, the selection restarts at the first
/// id rather than guessing a neighbour. An empty list clears it.
fn cycle_id<'a>(
    current: Option<&str>,
    ids: impl Iterator<Item = &'a str>,
    delta: isize,
) -> Option<String> {
    let ids: Vec<&str> = ids.collect();
    if ids.is_empty() {
        return None;
    }
    let next = match current.and_then(|id| ids.iter().position(|candidate| *candidate == id)) {
        Some(position) => {
            let len = ids.len() as isize;
            (position as isize + delta).rem_euclid(len) as usize
        }
        None => 0,
    };
    Some(ids[next].to_string())
}

#[cfg(test)]
mod tests {
    use super::super::tests::{sample_book, sample_member, test_app};
    use super::*;
    use crate::app::AppMessage;

    #[test]
    fn test_cycle_id_steps_and_wraps() {
        let ids = ["a", "b", "c"];
        assert_eq!(cycle_id(None, ids.into_iter(), 1), Some("a".to_string()));
        assert_eq!(
            cycle_id(Some("a"), ids.into_iter(), 1),
            Some("b".to_string())
        );
        assert_eq!(
            cycle_id(Some("c"), ids.into_iter(), 1),
            Some("a".to_string())
        );
        assert_eq!(
            cycle_id(Some("a"), ids.into_iter(), -1),
            Some("c".to_string())
        );
    }

    #[test]
    fn test_cycle_id_handles_vanished_and_empty() {
        let ids = ["a", "b"];
        assert_eq!(
            cycle_id(Some("gone"), ids.into_iter(), 1),
            Some("a".to_string())
        );
        assert_eq!(cycle_id(Some("a"), std::iter::empty(), 1), None);
    }

    #[tokio::test]
    async fn test_move_selection_respects_bounds() {
        let (mut app, _rx) = test_app();
        app.handle_message(AppMessage::BooksLoaded(vec![
            sample_book("b1"),
            sample_book("b2"),
        ]));

        app.move_up(); // already at 0
        assert_eq!(app.books_index, 0);
        app.move_down();
        assert_eq!(app.books_index, 1);
        app.move_down(); // at the end
        assert_eq!(app.books_index, 1);
    }

    #[tokio::test]
    async fn test_switch_section_fetches_loans_once(){
        let (mut app, mut rx) = test_app();
        assert!(!app.loans_requested());

        app.switch_section(Section::Loans);
        assert!(app.loans_requested());

        // Second visit does not re-trigger the initial fetch
        app.switch_section(Section::Books);
        app.switch_section(Section::Loans);

        // Allow the single spawned fetch to fail against the dead port
        let first = rx.recv().await;
        assert!(matches!(
            first,
            Some(AppMessage::LoadFailed {
                section: Section::Loans,
                ..
            })
        ));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_loan_form_selection_cycles_collections() {
        let (mut app, _rx) = test_app();
        app.handle_message(AppMessage::BooksLoaded(vec![
            sample_book("b1"),
            sample_book("b2"),
        ]));
        app.handle_message(AppMessage::MembersLoaded(vec![sample_member("m1")]));

        app.cycle_loan_book(1);
        assert_eq!(app.loan_form.book_id.as_deref(), Some("b1"));
        app.cycle_loan_book(1);
        assert_eq!(app.loan_form.book_id.as_deref(), Some("b2"));
        app.cycle_loan_book(1);
        assert_eq!(app.loan_form.book_id.as_deref(), Some("b1"));

        app.cycle_loan_member(-1);
        assert_eq!(app.loan_form.member_id.as_deref(), Some("m1"));
    }
}
