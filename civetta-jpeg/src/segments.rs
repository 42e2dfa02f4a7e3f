use civetta_common::limits::Limits;
use civetta_common::math::*;
use civetta_common::read::{ByteOrder, ByteView};

use crate::{Error, Marker, MARKER_START};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    marker: Marker,
    pos: usize,
    data: &'a [u8],
}

impl<'a> Segment<'a> {
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Position of the marker
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Position of the segment body, behind marker and length
    pub fn data_pos(&self) -> usize {
        self.pos.saturating_add(4)
    }

    /// Segment body
    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}

/// Iterator over the segments of a JPEG image
///
/// Stops after the start of scan, at the end of image, or at the end of the
/// data. After the first error no further items are returned.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    view: ByteView<'a>,
    position: usize,
    count: usize,
    limits: Limits,
    done: bool,
}

impl<'a> Segments<'a> {
    pub(crate) fn new(data: &'a [u8], limits: Limits) -> Self {
        Self {
            view: ByteView::new(data, ByteOrder::Big),
            // Behind SOI
            position: 2,
            count: 0,
            limits,
            done: false,
        }
    }

    fn read_next(&mut self) -> Result<Option<Segment<'a>>, Error> {
        let pos = self.position;

        // Marker and length
        if !self.view.has(pos, 4) {
            tracing::debug!("End of data at {pos}");
            return Ok(None);
        }

        let [prefix, marker] = self.view.array(pos)?;
        if prefix != MARKER_START {
            return Err(Error::MarkerExpected(pos));
        }
        let marker = Marker::from(marker);
        if marker == Marker::EOI {
            return Ok(None);
        }

        if self.count >= self.limits.max_structures {
            return Err(Error::TooManySegments(self.limits.max_structures));
        }

        let length = self.view.u16(pos.safe_add(2)?)?;
        if length < 2 {
            return Err(Error::InvalidSegmentLength {
                position: pos,
                length,
            });
        }

        let data_len = usize::from(length).safe_sub(2)?;
        let data = self.view.slice(pos.safe_add(4)?, data_len)?;
        tracing::debug!("Segment {marker:?} at {pos} with length {length}");

        self.count = self.count.safe_add(1)?;
        self.position = pos.safe_add(2)?.safe_add(usize::from(length))?;

        // Entropy coded data follows
        if marker == Marker::SOS {
            self.done = true;
        }

        Ok(Some(Segment { marker, pos, data }))
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Result<Segment<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_next() {
            Ok(Some(segment)) => Some(Ok(segment)),
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
