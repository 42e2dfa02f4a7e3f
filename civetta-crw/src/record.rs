use civetta_common::math::*;
use civetta_common::range::ByteRange;

/// Size of a record in the record table
pub const RECORD_SIZE: usize = 10;

const STORAGE_MASK: u16 = 0xC000;
const DATA_TYPE_MASK: u16 = 0x3800;
const ID_MASK: u16 = 0x07FF;
const TYPE_CODE_MASK: u16 = DATA_TYPE_MASK | ID_MASK;

civetta_common::utils::convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// Where the value of a record is stored
    pub enum Storage {
        /// Offset and length point into the heap
        InHeap = 0x0000,
        /// The eight bytes behind the type are the value
        InRecord = 0x4000,
    }
);

civetta_common::utils::convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum DataType {
        Byte = 0x0000,
        Ascii = 0x0800,
        Word = 0x1000,
        DWord = 0x1800,
        Byte2 = 0x2000,
        /// Nested heap
        HeapTypeProperty1 = 0x2800,
        /// Nested heap
        HeapTypeProperty2 = 0x3000,
    }
);

civetta_common::utils::convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// Known record types without the storage bits
    pub enum RecordType {
        Description = 0x0805,
        /// Make and model, separated by a NUL byte
        ModelName = 0x080A,
        FirmwareVersion = 0x080B,
        ComponentVersion = 0x080C,
        RomOperationMode = 0x080D,
        OwnerName = 0x0810,
        ImageFileName = 0x0816,
        ThumbnailFileName = 0x0817,
        TargetImageType = 0x100A,
        ReleaseMethod = 0x1010,
        ReleaseTiming = 0x1011,
        ReleaseSetting = 0x1016,
        BodySensitivity = 0x101C,
        CanonFlashInfo = 0x1028,
        FocalLength = 0x1029,
        CanonShotInfo = 0x102A,
        CanonCameraSettings = 0x102D,
        SensorInfo = 0x1031,
        CanonAfInfo = 0x1038,
        CanonFileInfo = 0x1093,
        ColorSpace = 0x10B4,
        RawJpgInfo = 0x10B5,
        ImageFormat = 0x1803,
        RecordId = 0x1804,
        SelfTimerTime = 0x1806,
        TargetDistanceSetting = 0x1807,
        BodyId = 0x180B,
        CapturedTime = 0x180E,
        ImageSpec = 0x1810,
        ExposureFlash = 0x1813,
        MeasuredEv = 0x1814,
        SerialNumber = 0x1817,
        ShootingExposure = 0x1818,
        CanonModelId = 0x1834,
        DecoderTable = 0x1835,
        SerialNumberFormat = 0x183B,
        RawData = 0x2005,
        JpgFromRaw = 0x2007,
        ThumbnailImage = 0x2008,
        ShootingRecord = 0x2802,
        MeasuredInfo = 0x2803,
        ImageDescription = 0x2804,
        CameraObject = 0x2807,
        CameraSpecification = 0x3004,
        ImageProperties = 0x300A,
        ExifInformation = 0x300B,
    }
);

/// Entry of a heap's record table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    raw_type: u16,
    /// Length for values stored in the heap
    length: u32,
    /// Offset relative to the heap start for values stored in the heap
    offset: u32,
    /// Position of the record in the file
    pos: usize,
}

impl Record {
    pub(crate) fn new(raw: [u8; RECORD_SIZE], pos: usize) -> Self {
        let [t0, t1, l0, l1, l2, l3, o0, o1, o2, o3] = raw;
        Self {
            raw_type: u16::from_le_bytes([t0, t1]),
            length: u32::from_le_bytes([l0, l1, l2, l3]),
            offset: u32::from_le_bytes([o0, o1, o2, o3]),
            pos,
        }
    }

    /// Type including the storage bits
    pub fn raw_type(&self) -> u16 {
        self.raw_type
    }

    pub fn record_type(&self) -> RecordType {
        RecordType::from(self.raw_type & TYPE_CODE_MASK)
    }

    /// Id without data type and storage bits
    pub fn id(&self) -> u16 {
        self.raw_type & ID_MASK
    }

    pub fn storage(&self) -> Storage {
        Storage::from(self.raw_type & STORAGE_MASK)
    }

    pub fn data_type(&self) -> DataType {
        DataType::from(self.raw_type & DATA_TYPE_MASK)
    }

    /// Record points to a nested heap
    pub fn is_heap(&self) -> bool {
        matches!(
            self.data_type(),
            DataType::HeapTypeProperty1 | DataType::HeapTypeProperty2
        )
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Position of the record in the file
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Location of the eight value bytes inside the record
    pub fn in_record_range(&self) -> Result<ByteRange, MathError> {
        let start = self.pos.safe_add(2)?;
        ByteRange::from_bounds(start, start.safe_add(8)?)
    }
}
