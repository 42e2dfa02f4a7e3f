use civetta_common::limits::Limits;
use civetta_common::math::*;
use civetta_common::read::{ByteOrder, ByteView};

use crate::{Error, FourCC};

/// Size of FourCC and length in front of the payload
const HEADER_SIZE: usize = 8;
/// Size of the form type at the beginning of the RIFF payload
const FORM_TYPE_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    four_cc: FourCC,
    pos: usize,
    payload: &'a [u8],
}

impl<'a> Chunk<'a> {
    pub fn four_cc(&self) -> FourCC {
        self.four_cc
    }

    /// Position of the chunk header in the file
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn payload_pos(&self) -> usize {
        self.pos.saturating_add(HEADER_SIZE)
    }

    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    /// Length as given in the chunk header
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

/// Iterator over a flat sequence of chunks
///
/// Positions are relative to the beginning of the file. After the first error
/// no further items are returned.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    view: ByteView<'a>,
    position: usize,
    count: usize,
    limits: Limits,
    done: bool,
}

impl<'a> Chunks<'a> {
    /// Chunks in `data[start..end]`
    pub(crate) fn new(data: &'a [u8], start: usize, end: usize, limits: Limits) -> Self {
        let data = data.get(..end).unwrap_or(data);
        Self {
            view: ByteView::new(data, ByteOrder::Little),
            position: start,
            count: 0,
            limits,
            done: false,
        }
    }

    fn read_next(&mut self) -> Result<Option<Chunk<'a>>, Error> {
        let pos = self.position;
        if pos >= self.view.len() {
            return Ok(None);
        }

        if self.count >= self.limits.max_structures {
            return Err(Error::TooManyChunks(self.limits.max_structures));
        }

        let four_cc = FourCC::from(self.view.u32(pos)?);
        let length = self.view.u32(pos.safe_add(4)?)?;
        let payload_pos = pos.safe_add(HEADER_SIZE)?;
        let payload = self.view.slice(payload_pos, length.usize()?)?;
        tracing::debug!("Chunk {four_cc} at {pos} with length {length}");

        self.count = self.count.safe_add(1)?;
        self.position = payload_pos.safe_add(payload.len())?;
        // If odd, jump over 1 byte padding
        if length & 1 == 1 {
            self.position = self.position.safe_add(1)?;
        }

        Ok(Some(Chunk {
            four_cc,
            pos,
            payload,
        }))
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Result<Chunk<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_next() {
            Ok(Some(chunk)) => Some(Ok(chunk)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// RIFF container
///
/// The data must contain exactly one top-level `RIFF` chunk. Its payload
/// starts with a form type, followed by further chunks.
#[derive(Debug, Clone)]
pub struct Riff<'a> {
    data: &'a [u8],
    chunks: Vec<Chunk<'a>>,
    riff: Chunk<'a>,
    limits: Limits,
}

impl<'a> Riff<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        Self::with_limits(data, Limits::default())
    }

    pub fn with_limits(data: &'a [u8], limits: Limits) -> Result<Self, Error> {
        let chunks = Chunks::new(data, 0, data.len(), limits).collect::<Result<Vec<_>, _>>()?;

        let mut riff_chunks = chunks.iter().filter(|x| x.four_cc() == FourCC::RIFF);
        let riff = match (riff_chunks.next(), riff_chunks.count()) {
            (Some(riff), 0) => riff.clone(),
            (None, _) => return Err(Error::RiffChunkCount(0)),
            (Some(_), n) => return Err(Error::RiffChunkCount(n.saturating_add(1))),
        };

        if riff.len() < FORM_TYPE_SIZE {
            return Err(Error::FormTypeMissing(riff.len()));
        }

        Ok(Self {
            data,
            chunks,
            riff,
            limits,
        })
    }

    /// Top-level chunks
    pub fn chunks(&self) -> &[Chunk<'a>] {
        &self.chunks
    }

    /// The `RIFF` chunk
    pub fn riff(&self) -> &Chunk<'a> {
        &self.riff
    }

    /// Form type like `WEBP`
    pub fn form_type(&self) -> Result<[u8; 4], Error> {
        Ok(ByteView::new(self.riff.payload(), ByteOrder::Little).array(0)?)
    }

    /// Iterator over the chunks inside of the `RIFF` chunk
    pub fn sub_chunks_iter(&self) -> Result<Chunks<'a>, Error> {
        let start = self.riff.payload_pos().safe_add(FORM_TYPE_SIZE)?;
        let end = self.riff.payload_pos().safe_add(self.riff.len())?;
        Ok(Chunks::new(self.data, start, end, self.limits))
    }

    /// Chunks inside of the `RIFF` chunk
    pub fn sub_chunks(&self) -> Result<Vec<Chunk<'a>>, Error> {
        self.sub_chunks_iter()?.collect()
    }
}
