//! Level 11: a singly linked list on a bounded heap
//!
//! Builds `30 -> 20 -> 10` by front insertion, printing after every step,
//! then tears the list down. Each step is also recorded in the context's list
//! history so the heap can be inspected afterwards.
//!
//! If the heap runs out of room the failed insertion is reported, the list is
//! still freed, and the level returns the allocation error.

use super::Context;
use crate::errors::GuideError;
use crate::memory::list::LinkedList;
use crate::snapshot::ListSnapshot;
use log::debug;

/// Values inserted, in insertion order
pub const DEMO_VALUES: [i32; 3] = [10, 20, 30];

pub fn run(ctx: &mut Context) -> Result<(), GuideError> {
    let level = ctx.current_level();
    let mut list = LinkedList::with_max_nodes(ctx.config.max_nodes);

    list.print(&mut ctx.terminal, level);
    ctx.list_history.push(ListSnapshot::capture("empty list", &list));

    let mut outcome = Ok(());
    for value in DEMO_VALUES {
        match list.insert_front(value) {
            Ok(_) => {
                list.print(&mut ctx.terminal, level);
                ctx.list_history
                    .push(ListSnapshot::capture(format!("insert_front({})", value), &list));
            }
            Err(e) => {
                ctx.say(format!(
                    "insert_front({}) failed; the list is unchanged.",
                    value
                ));
                outcome = Err(e);
                break;
            }
        }
    }

    ctx.say("Freeing list memory...");
    let released = list.destroy()?;
    debug!("list teardown released {} nodes", released);
    ctx.say("List freed.");
    list.print(&mut ctx.terminal, level);
    ctx.list_history.push(ListSnapshot::capture("destroy", &list));

    outcome
}
