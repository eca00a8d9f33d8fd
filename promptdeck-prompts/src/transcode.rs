//! Transcode controller
//!
//! A format change extracts raw text using the slot's current format and
//! re-wraps it in the new one. Only the targeted slot is touched.

use crate::extractor::try_extract;
use crate::format::Format;
use crate::formatter::format;
use crate::slots::{ContentSlot, SlotStore};
use tracing::debug;

/// What a format switch did to the slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscodeOutcome {
    /// The slot was already in the requested format
    Unchanged,
    /// The slot was empty; only its format changed
    FormatOnly {
        /// Previous format
        from: Format,
        /// New format
        to: Format,
    },
    /// The slot's text was re-wrapped
    Transcoded {
        /// Previous format
        from: Format,
        /// New format
        to: Format,
        /// False when the old wrapper was not recognized and the text was
        /// treated as raw
        recovered: bool,
    },
}

/// Switch the active slot to `new_format`
pub fn switch_format(store: &mut SlotStore, new_format: Format) -> TranscodeOutcome {
    let slot = store.active_slot();
    switch_slot_format(store, slot, new_format)
}

/// Switch one slot to `new_format`, transcoding its text
pub fn switch_slot_format(
    store: &mut SlotStore,
    slot: ContentSlot,
    new_format: Format,
) -> TranscodeOutcome {
    let entry = store.slot_mut(slot);
    let from = entry.format;

    if from == new_format {
        return TranscodeOutcome::Unchanged;
    }

    if entry.text.is_empty() {
        entry.format = new_format;
        debug!(slot = %slot, %from, to = %new_format, "Switched format of empty slot");
        return TranscodeOutcome::FormatOnly {
            from,
            to: new_format,
        };
    }

    let extraction = try_extract(&entry.text, from);
    let recovered = extraction.is_recovered();
    entry.text = format(extraction.text(), new_format);
    entry.format = new_format;

    debug!(
        slot = %slot,
        %from,
        to = %new_format,
        recovered,
        "Transcoded slot"
    );

    TranscodeOutcome::Transcoded {
        from,
        to: new_format,
        recovered,
    }
}
