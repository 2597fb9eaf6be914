//! Single-open FAQ accordion state.
//!
//! The accordion is either fully closed or has exactly one item open, so the
//! state is a two-variant enum rather than a nullable index. Toggling the
//! open item closes it; toggling any other item moves the open slot there.
//!
//! The state belongs to one rendered FAQ list and is never shared. The
//! renderer in [`components::faq_section`](crate::components::faq_section)
//! reads it to decide which answer is expanded.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccordionState {
    #[default]
    Closed,
    OpenAt(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaqAccordion {
    state: AccordionState,
}

impl FaqAccordion {
    /// A new accordion with every item closed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AccordionState {
        self.state
    }

    /// Open `index`, or close it if it is already open.
    pub fn toggle(&mut self, index: usize) {
        self.state = match self.state {
            AccordionState::OpenAt(open) if open == index => AccordionState::Closed,
            _ => AccordionState::OpenAt(index),
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.state == AccordionState::OpenAt(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        match self.state {
            AccordionState::Closed => None,
            AccordionState::OpenAt(i) => Some(i),
        }
    }
}
