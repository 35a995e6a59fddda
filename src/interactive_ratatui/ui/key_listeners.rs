//! Global key-listener table.
//!
//! Overlays register a listener while they are open and see key events
//! before focus-based routing happens. The most recent registration wins. A registration lives exactly as
//! long as the returned [`ListenerGuard`]: dropping the guard unregisters it,
//! so closing or dropping the owner can never leak a listener.

use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener = Box<dyn Fn(&KeyEvent) -> Option<Message>>;

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

#[derive(Clone, Default)]
pub struct KeyListeners {
    table: Rc<RefCell<ListenerTable>>,
}

impl KeyListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&self, listener: F) -> ListenerGuard
    where
        F: Fn(&KeyEvent) -> Option<Message> + 'static,
    {
        let mut table = self.table.borrow_mut();
        table.next_id += 1;
        let id = table.next_id;
        table.entries.push((id, Box::new(listener)));

        ListenerGuard {
            id,
            table: Rc::downgrade(&self.table),
        }
    }

    /// Offers the key to listeners newest first; the first one that answers
    /// consumes it
    pub fn dispatch(&self, key: &KeyEvent) -> Option<Message> {
        self.table
            .borrow()
            .entries
            .iter()
            .rev()
            .find_map(|(_, listener)| listener(key))
    }

    pub fn len(&self) -> usize {
        self.table.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct ListenerGuard {
    id: u64,
    table: Weak<RefCell<ListenerTable>>,
}

impl ListenerGuard {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            table.borrow_mut().entries.retain(|(id, _)| *id != self.id);
        }
    }
}
