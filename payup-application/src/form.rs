use crate::{
    error::FormError,
    normalizer::{coerce_amount, normalize_name},
};
use payup_domain::{ExpenseEntry, Headcount};

/// Largest participant count a form holds slots for.
pub const MAX_PARTICIPANTS: u32 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpenseSlot {
    pub name: String,
    pub amount: u64,
}

/// In-memory participant form: a participant count and one slot per participant.
///
/// Counts are kept within `1..=MAX_PARTICIPANTS`. Changing the count recreates every slot blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseForm {
    headcount: Headcount,
    slots: Vec<ExpenseSlot>,
}

impl ExpenseForm {
    pub fn new(people: u32) -> Self {
        let headcount = bounded_headcount(people);
        Self {
            headcount,
            slots: blank_slots(headcount),
        }
    }

    pub fn headcount(&self) -> Headcount {
        self.headcount
    }

    pub fn slots(&self) -> &[ExpenseSlot] {
        &self.slots
    }

    pub fn increment(&mut self) {
        self.set_people(self.headcount.get().saturating_add(1));
    }

    pub fn decrement(&mut self) {
        self.set_people(self.headcount.get().saturating_sub(1));
    }

    pub fn set_people(&mut self, people: u32) {
        let headcount = bounded_headcount(people);
        if headcount == self.headcount {
            return;
        }
        tracing::debug!(
            from = self.headcount.get(),
            to = headcount.get(),
            "Participant count changed; resetting slots"
        );
        self.headcount = headcount;
        self.slots = blank_slots(headcount);
    }

    pub fn set_name(&mut self, index: usize, name: &str) -> Result<(), FormError> {
        self.slot_mut(index)?.name = name.to_string();
        Ok(())
    }

    /// Store `text` coerced to a whole amount; unparseable input stores 0.
    pub fn set_amount(&mut self, index: usize, text: &str) -> Result<u64, FormError> {
        let amount = coerce_amount(text);
        self.slot_mut(index)?.amount = amount;
        Ok(amount)
    }

    pub fn normalized(&self) -> Vec<ExpenseEntry> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| {
                ExpenseEntry::new(normalize_name(index, &slot.name), slot.amount)
            })
            .collect()
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut ExpenseSlot, FormError> {
        let len = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(FormError::SlotOutOfRange { index, len })
    }
}

fn bounded_headcount(people: u32) -> Headcount {
    if people > MAX_PARTICIPANTS {
        tracing::warn!(
            requested = people,
            max = MAX_PARTICIPANTS,
            "Participant count above form limit; capping"
        );
    }
    Headcount::clamped(people.min(MAX_PARTICIPANTS))
}

fn blank_slots(headcount: Headcount) -> Vec<ExpenseSlot> {
    vec![ExpenseSlot::default(); headcount.get() as usize]
}
