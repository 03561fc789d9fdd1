//! Buffer accounting for transient payload allocations.
//!
//! Every buffer the V1/V0 adapters create goes through a [`BufferLedger`],
//! which asks a [`BufferAllocator`] for permission first and reports the
//! matching release exactly once when the ledger is drained or dropped.

use serde::Serialize;

use crate::error::TranscodeError;

/// What a transient buffer holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BufferKind {
    /// Flattened option array of the V1 payload.
    FlatOptions,
    /// Per-option value list inside a flattened option.
    FlatValues,
    /// One packed V0 string.
    PackedString,
    /// The V0 variable table.
    VariableTable,
}

impl BufferKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FlatOptions => "flat-options",
            Self::FlatValues => "flat-values",
            Self::PackedString => "packed-string",
            Self::VariableTable => "variable-table",
        }
    }
}

impl std::fmt::Display for BufferKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gate consulted before every transient allocation.
///
/// `acquire` returning `false` refuses the allocation. Each granted
/// `acquire` is paired with exactly one `release` of the same kind and length.
pub trait BufferAllocator {
    fn acquire(&self, kind: BufferKind, len: usize) -> bool;
    fn release(&self, kind: BufferKind, len: usize);
}

/// Grants everything; the heap reservation itself may still fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAllocator;

impl BufferAllocator for SystemAllocator {
    fn acquire(&self, _kind: BufferKind, _len: usize) -> bool {
        true
    }

    fn release(&self, _kind: BufferKind, _len: usize) {}
}

/// A granted allocation awaiting release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lease {
    pub kind: BufferKind,
    pub len: usize,
}

/// Tracks granted allocations and releases them exactly once.
pub struct BufferLedger<'a> {
    allocator: &'a dyn BufferAllocator,
    leases: Vec<Lease>,
}

impl<'a> BufferLedger<'a> {
    pub fn new(allocator: &'a dyn BufferAllocator) -> Self {
        Self {
            allocator,
            leases: Vec::new(),
        }
    }

    fn lease(&mut self, kind: BufferKind, len: usize) -> Result<(), TranscodeError> {
        if !self.allocator.acquire(kind, len) {
            return Err(TranscodeError::Refused { kind, len });
        }
        self.leases.push(Lease { kind, len });
        Ok(())
    }

    /// Empty vector with room for exactly `len` elements.
    pub fn vec<T>(&mut self, kind: BufferKind, len: usize) -> Result<Vec<T>, TranscodeError> {
        self.lease(kind, len)?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(len)
            .map_err(|source| TranscodeError::Reserve { kind, len, source })?;
        Ok(buf)
    }

    /// Empty string with room for exactly `len` bytes.
    pub fn string(&mut self, kind: BufferKind, len: usize) -> Result<String, TranscodeError> {
        self.lease(kind, len)?;
        let mut buf = String::new();
        buf.try_reserve_exact(len)
            .map_err(|source| TranscodeError::Reserve { kind, len, source })?;
        Ok(buf)
    }

    /// Number of granted allocations not yet released.
    pub fn outstanding(&self) -> usize {
        self.leases.len()
    }

    pub fn leases(&self) -> &[Lease] {
        &self.leases
    }

    /// Releases every outstanding lease, newest first. Idempotent.
    pub fn release_all(&mut self) {
        let allocator = self.allocator;
        for lease in self.leases.drain(..).rev() {
            allocator.release(lease.kind, lease.len);
        }
    }
}

impl Drop for BufferLedger<'_> {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl std::fmt::Debug for BufferLedger<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferLedger")
            .field("leases", &self.leases)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct Recorder {
        refuse: Cell<bool>,
        events: RefCell<Vec<(&'static str, BufferKind, usize)>>,
    }

    impl BufferAllocator for Recorder {
        fn acquire(&self, kind: BufferKind, len: usize) -> bool {
            if self.refuse.get() {
                return false;
            }
            self.events.borrow_mut().push(("acquire", kind, len));
            true
        }

        fn release(&self, kind: BufferKind, len: usize) {
            self.events.borrow_mut().push(("release", kind, len));
        }
    }

    #[test]
    fn reservations_have_requested_room() {
        let mut ledger = BufferLedger::new(&SystemAllocator);
        let s = ledger.string(BufferKind::PackedString, 17).unwrap();
        let v: Vec<u64> = ledger.vec(BufferKind::FlatOptions, 3).unwrap();
        assert!(s.capacity() >= 17);
        assert!(v.capacity() >= 3);
        assert_eq!(ledger.outstanding(), 2);
    }

    #[test]
    fn release_happens_once_in_reverse_order() {
        let recorder = Recorder::default();
        {
            let mut ledger = BufferLedger::new(&recorder);
            ledger.string(BufferKind::PackedString, 4).unwrap();
            ledger.vec::<u8>(BufferKind::VariableTable, 2).unwrap();
            ledger.release_all();
            ledger.release_all();
        }
        assert_eq!(
            *recorder.events.borrow(),
            vec![
                ("acquire", BufferKind::PackedString, 4),
                ("acquire", BufferKind::VariableTable, 2),
                ("release", BufferKind::VariableTable, 2),
                ("release", BufferKind::PackedString, 4),
            ]
        );
    }

    #[test]
    fn drop_releases_outstanding_leases() {
        let recorder = Recorder::default();
        {
            let mut ledger = BufferLedger::new(&recorder);
            ledger.string(BufferKind::PackedString, 1).unwrap();
        }
        assert_eq!(recorder.events.borrow().len(), 2);
    }

    #[test]
    fn refused_allocation_is_not_recorded() {
        let recorder = Recorder::default();
        recorder.refuse.set(true);
        let mut ledger = BufferLedger::new(&recorder);
        let err = ledger.string(BufferKind::PackedString, 8).unwrap_err();
        assert_eq!(
            err,
            TranscodeError::Refused {
                kind: BufferKind::PackedString,
                len: 8
            }
        );
        assert_eq!(ledger.outstanding(), 0);
        drop(ledger);
        assert!(recorder.events.borrow().is_empty());
    }
}
