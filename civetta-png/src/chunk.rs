use civetta_common::limits::Limits;
use civetta_common::math::*;
use civetta_common::read::{ByteOrder, ByteView};

use crate::{ChunkType, Error};

/// Size of length and type in front of the chunk data
const HEADER_SIZE: usize = 8;
const CRC_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub(crate) chunk_type: ChunkType,
    pub(crate) pos: usize,
    pub(crate) data: &'a [u8],
}

impl<'a> Chunk<'a> {
    pub fn chunk_type(&self) -> ChunkType {
        self.chunk_type
    }

    /// Position of the length field
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn data_pos(&self) -> usize {
        self.pos.saturating_add(HEADER_SIZE)
    }

    pub fn chunk_data(&self) -> &'a [u8] {
        self.data
    }
}

/// Iterator over the chunks of a PNG image
///
/// Stops behind `IEND` or at the end of the data. After the first error no
/// further items are returned.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    view: ByteView<'a>,
    position: usize,
    count: usize,
    limits: Limits,
    done: bool,
}

impl<'a> Chunks<'a> {
    pub(crate) fn new(data: &'a [u8], position: usize, limits: Limits) -> Self {
        Self {
            view: ByteView::new(data, ByteOrder::Big),
            position,
            count: 0,
            limits,
            done: false,
        }
    }

    fn read_next(&mut self) -> Result<Option<Chunk<'a>>, Error> {
        let pos = self.position;
        if pos >= self.view.len() {
            tracing::debug!("End of data at {pos}");
            return Ok(None);
        }

        if self.count >= self.limits.max_structures {
            return Err(Error::TooManyChunks(self.limits.max_structures));
        }

        let length = self.view.u32(pos)?;
        let chunk_type = ChunkType::from(self.view.u32(pos.safe_add(4)?)?);
        let data_pos = pos.safe_add(HEADER_SIZE)?;
        let data = self.view.slice(data_pos, length.usize()?)?;
        tracing::debug!("Chunk {chunk_type:?} at {pos} with length {length}");

        self.count = self.count.safe_add(1)?;
        // CRC is not checked
        self.position = data_pos.safe_add(data.len())?.safe_add(CRC_SIZE)?;

        if chunk_type == ChunkType::IEND {
            self.done = true;
        }

        Ok(Some(Chunk {
            chunk_type,
            pos,
            data,
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
