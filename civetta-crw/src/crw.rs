use civetta_common::image::{ExifLocator, ImageFormat};
use civetta_common::limits::Limits;
use civetta_common::math::*;
use civetta_common::range::ByteRange;
use civetta_common::read::{ByteOrder, ByteView};

use crate::{Error, Heap, RecordType};

pub const BYTE_ORDER_MARKER: &[u8] = b"II";
pub const SIGNATURE: &[u8] = b"HEAPCCDR";

/// Id of the image properties heap inside the root heap
pub const IMAGE_PROPERTIES_ID: u16 = 0x000A;
/// Id of the Exif information heap inside the image properties
pub const EXIF_INFORMATION_ID: u16 = 0x000B;

/// Canon CRW raw image
#[derive(Debug, Clone)]
pub struct Crw<'a> {
    data: &'a [u8],
    limits: Limits,
}

impl ImageFormat for Crw<'_> {
    const NAME: &'static str = "CRW";
    const MEDIA_TYPE: &'static str = "image/x-canon-crw";

    fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(BYTE_ORDER_MARKER) && data.get(6..14) == Some(SIGNATURE)
    }
}

impl<'a> Crw<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        Self::with_limits(data, Limits::default())
    }

    pub fn with_limits(data: &'a [u8], limits: Limits) -> Result<Self, Error> {
        if !Self::is_filetype(data) {
            return Err(Error::NotCrw);
        }

        Ok(Self { data, limits })
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Heap behind the file header, reaching to the end of the file
    pub fn root(&self) -> Result<Heap<'a>, Error> {
        let header_len = ByteView::new(self.data, ByteOrder::Little).u32(2)?;
        Heap::parse(self.data, header_len.usize()?, self.data.len(), 0, self.limits)
    }

    /// All heaps, depth first, starting with the root heap
    pub fn walk(&self) -> Result<Vec<Heap<'a>>, Error> {
        let mut heaps = Vec::new();
        let mut records = 0_usize;
        self.walk_heap(self.root()?, &mut heaps, &mut records)?;
        Ok(heaps)
    }

    /// Sub-heaps are parsed one at a time, right before they are walked
    fn walk_heap(
        &self,
        heap: Heap<'a>,
        heaps: &mut Vec<Heap<'a>>,
        records: &mut usize,
    ) -> Result<(), Error> {
        *records = records.saturating_add(heap.records().len());
        if *records > self.limits.max_structures {
            return Err(Error::TooManyRecords(self.limits.max_structures));
        }

        let index = heaps.len();
        let count = heap.records().len();
        heaps.push(heap);

        for i in 0..count {
            let Some(heap) = heaps.get(index) else {
                break;
            };
            let Some(record) = heap.records().get(i).filter(|x| x.is_heap()) else {
                continue;
            };
            let sub_heap = heap.sub_heap(record, self.limits)?;
            self.walk_heap(sub_heap, heaps, records)?;
        }

        Ok(())
    }

    /// Heap with the image properties
    pub fn image_properties(&self) -> Result<Heap<'a>, Error> {
        let root = self.root()?;
        let record = root
            .find_heap(IMAGE_PROPERTIES_ID)
            .ok_or(Error::NoExifFound)?;
        root.sub_heap(record, self.limits)
    }

    /// Heap with the Exif information
    pub fn exif_information(&self) -> Result<Heap<'a>, Error> {
        let properties = self.image_properties()?;
        let record = properties
            .find_heap(EXIF_INFORMATION_ID)
            .ok_or(Error::NoExifFound)?;
        properties.sub_heap(record, self.limits)
    }

    /// Make and model from the model name record
    pub fn make_model(&self) -> Result<(String, String), Error> {
        for heap in self.walk()? {
            if let Some(record) = heap.find_type(RecordType::ModelName) {
                let data = heap.record_data(record)?;
                let mut parts = data
                    .split(|x| *x == 0)
                    .map(|x| String::from_utf8_lossy(x).trim().to_string());
                let make = parts.next().unwrap_or_default();
                let model = parts.next().unwrap_or_default();
                return Ok((make, model));
            }
        }

        Err(Error::RecordNotFound(RecordType::ModelName.into()))
    }

    pub fn exif_data(&self) -> Result<&'a [u8], Error> {
        Ok(self.exif_range()?.slice(self.data)?)
    }
}

impl ExifLocator for Crw<'_> {
    type Error = Error;

    /// First record in the Exif information heap that starts with a TIFF
    /// header
    fn exif_range(&self) -> Result<ByteRange, Error> {
        let heap = self.exif_information()?;

        for record in heap.records() {
            let range = match heap.record_range(record) {
                Ok(range) => range,
                Err(err) => {
                    tracing::info!("Ignoring record {:#06x}: {err}", record.raw_type());
                    continue;
                }
            };
            let data = range.slice(self.data)?;
            if data.starts_with(b"II*\0") || data.starts_with(b"MM\0*") {
                tracing::debug!("TIFF header in record {:#06x}", record.raw_type());
                return Ok(range);
            }
        }

        Err(Error::NoExifFound)
    }
}
