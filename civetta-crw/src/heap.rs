use civetta_common::limits::Limits;
use civetta_common::math::*;
use civetta_common::range::ByteRange;
use civetta_common::read::{ByteOrder, ByteView, ReadError};

use crate::{Error, Record, RecordType, Storage, RECORD_SIZE};

/// Size of the table offset at the end of a heap
const TABLE_OFFSET_SIZE: usize = 4;

/// A heap and its record table
///
/// All positions handed out are relative to the beginning of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heap<'a> {
    file: &'a [u8],
    start: usize,
    end: usize,
    depth: usize,
    records: Vec<Record>,
}

impl<'a> Heap<'a> {
    /// Reads the heap in `file[start..end]`
    pub(crate) fn parse(
        file: &'a [u8],
        start: usize,
        end: usize,
        depth: usize,
        limits: Limits,
    ) -> Result<Self, Error> {
        let data = file.get(start..end).ok_or(ReadError::OutOfBounds {
            offset: start,
            len: end.saturating_sub(start),
            available: file.len(),
        })?;
        let view = ByteView::new(data, ByteOrder::Little);

        let table_offset = view
            .u32(data.len().safe_sub(TABLE_OFFSET_SIZE)?)?
            .usize()?;
        let count = view.u16(table_offset)?;
        tracing::debug!("Heap at {start} with {count} records at depth {depth}");

        if usize::from(count) > limits.max_structures {
            return Err(Error::TooManyRecords(limits.max_structures));
        }

        let mut records = Vec::with_capacity(usize::from(count));
        for i in 0..usize::from(count) {
            let offset = (Checked::new(i) * RECORD_SIZE + table_offset + 2_usize).check()?;
            let raw = view.array::<RECORD_SIZE>(offset)?;
            let record = Record::new(raw, start.safe_add(offset)?);
            tracing::debug!(
                "Record {:?} ({:#06x}) with length {} at {}",
                record.record_type(),
                record.raw_type(),
                record.length(),
                record.offset()
            );
            records.push(record);
        }

        Ok(Self {
            file,
            start,
            end,
            depth,
            records,
        })
    }

    /// Position of the heap in the file
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nesting level, zero for the root heap
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// First record with the given id, ignoring data type and storage bits
    pub fn find(&self, id: u16) -> Option<&Record> {
        self.records.iter().find(|x| x.id() == id)
    }

    /// First record with the given id that holds a heap
    pub fn find_heap(&self, id: u16) -> Option<&Record> {
        self.records.iter().find(|x| x.id() == id && x.is_heap())
    }

    /// First record with the given type
    pub fn find_type(&self, record_type: RecordType) -> Option<&Record> {
        self.records.iter().find(|x| x.record_type() == record_type)
    }

    /// Location of the record's value in the file
    ///
    /// Values stored in the heap have to lie inside of the heap.
    pub fn record_range(&self, record: &Record) -> Result<ByteRange, Error> {
        match record.storage() {
            Storage::InRecord => Ok(record.in_record_range()?),
            Storage::InHeap => {
                let start = self.start.safe_add(record.offset().usize()?)?;
                let end = start.safe_add(record.length().usize()?)?;
                if end > self.end {
                    return Err(ReadError::OutOfBounds {
                        offset: start,
                        len: record.length().usize()?,
                        available: self.end,
                    }
                    .into());
                }
                Ok(ByteRange::from_bounds(start, end)?)
            }
            Storage::Unknown(storage) => Err(Error::UnknownStorage(storage)),
        }
    }

    /// Value of the record
    pub fn record_data(&self, record: &Record) -> Result<&'a [u8], Error> {
        Ok(self.record_range(record)?.slice(self.file)?)
    }

    /// Reads the heap the record points to
    pub fn sub_heap(&self, record: &Record, limits: Limits) -> Result<Heap<'a>, Error> {
        if !record.is_heap() || record.storage() != Storage::InHeap {
            return Err(Error::NotAHeap(record.raw_type()));
        }

        let depth = self.depth.safe_add(1)?;
        if depth > limits.max_heap_depth {
            return Err(Error::HeapTooDeep(limits.max_heap_depth));
        }

        let range = self.record_range(record)?.range()?;
        if range.len() >= self.len() {
            return Err(Error::HeapNotSmaller(range.start));
        }

        Heap::parse(self.file, range.start, range.end, depth, limits)
    }
}
