//! Exif fields
//!
//! Every known field is a unit struct implementing [`Field`](crate::exif::Field).
//! The names are used when dumping directories.

mod macros;

use crate::exif::Ifd;

macros::make_tags![
    // TIFF
    // Image data structure
    (0x0100, ImageWidth, Ifd::Primary),
    (0x0101, ImageLength, Ifd::Primary),
    (0x0102, BitsPerSample, Ifd::Primary),
    (0x0103, Compression, Ifd::Primary),
    (0x0106, PhotometricInterpretation, Ifd::Primary),
    /// Image orientation and mirroring
    (0x0112, Orientation, Ifd::Primary),
    (0x0115, SamplesPerPixel, Ifd::Primary),
    (0x011C, PlanarConfiguration, Ifd::Primary),
    (0x0212, YCbCrSubSampling, Ifd::Primary),
    (0x0213, YCbCrPositioning, Ifd::Primary),
    (0x011A, XResolution, Ifd::Primary),
    (0x011B, YResolution, Ifd::Primary),
    (0x0128, ResolutionUnit, Ifd::Primary),
    // Recording offset
    (0x0111, StripOffsets, Ifd::Primary),
    (0x0116, RowsPerStrip, Ifd::Primary),
    (0x0117, StripByteCounts, Ifd::Primary),
    (0x0201, JPEGInterchangeFormat, Ifd::Primary),
    (0x0202, JPEGInterchangeFormatLength, Ifd::Primary),
    // Image data characteristics
    (0x012D, TransferFunction, Ifd::Primary),
    (0x013E, WhitePoint, Ifd::Primary),
    (0x013F, PrimaryChromaticities, Ifd::Primary),
    (0x0211, YCbCrCoefficients, Ifd::Primary),
    (0x0214, ReferenceBlackWhite, Ifd::Primary),
    // Other
    /// Modification date in the format `YYYY:MM:DD HH:MM:SS`
    (0x0132, DateTime, Ifd::Primary),
    (0x010E, ImageDescription, Ifd::Primary),
    (0x010F, Make, Ifd::Primary),
    (0x0110, Model, Ifd::Primary),
    (0x0131, Software, Ifd::Primary),
    (0x013B, Artist, Ifd::Primary),
    (0x8298, Copyright, Ifd::Primary),
    // Pointers
    (0x8769, ExifIfdPointer, Ifd::Primary),
    (0x8825, GpsInfoIfdPointer, Ifd::Primary),

    // Exif
    // Version
    (0x9000, ExifVersion, Ifd::Exif),
    (0xA000, FlashpixVersion, Ifd::Exif),
    // Image data characteristics
    (0xA001, ColorSpace, Ifd::Exif),
    (0xA500, Gamma, Ifd::Exif),
    // Image configuration
    (0x9101, ComponentsConfiguration, Ifd::Exif),
    (0x9102, CompressedBitsPerPixel, Ifd::Exif),
    (0xA002, PixelXDimension, Ifd::Exif),
    (0xA003, PixelYDimension, Ifd::Exif),
    // User information
    (0x927C, MakerNote, Ifd::Exif),
    (0x9286, UserComment, Ifd::Exif),
    (0xA004, RelatedSoundFile, Ifd::Exif),
    // Date and time
    (0x9003, DateTimeOriginal, Ifd::Exif),
    (0x9004, DateTimeDigitized, Ifd::Exif),
    (0x9010, OffsetTime, Ifd::Exif),
    (0x9011, OffsetTimeOriginal, Ifd::Exif),
    (0x9012, OffsetTimeDigitized, Ifd::Exif),
    (0x9290, SubSecTime, Ifd::Exif),
    (0x9291, SubSecTimeOriginal, Ifd::Exif),
    (0x9292, SubSecTimeDigitized, Ifd::Exif),
    // Picture-taking conditions
    (0x829A, ExposureTime, Ifd::Exif),
    (0x829D, FNumber, Ifd::Exif),
    (0x8822, ExposureProgram, Ifd::Exif),
    (0x8824, SpectralSensitivity, Ifd::Exif),
    /// Also called ISOSpeedRatings
    (0x8827, PhotographicSensitivity, Ifd::Exif),
    (0x8828, OECF, Ifd::Exif),
    (0x8830, SensitivityType, Ifd::Exif),
    (0x8831, StandardOutputSensitivity, Ifd::Exif),
    (0x8832, RecommendedExposureIndex, Ifd::Exif),
    (0x8833, ISOSpeed, Ifd::Exif),
    (0x8834, ISOSpeedLatitudeyyy, Ifd::Exif),
    (0x8835, ISOSpeedLatitudezzz, Ifd::Exif),
    (0x9201, ShutterSpeedValue, Ifd::Exif),
    /// Lens aperture with unit APEX
    (0x9202, ApertureValue, Ifd::Exif),
    (0x9203, BrightnessValue, Ifd::Exif),
    (0x9204, ExposureBiasValue, Ifd::Exif),
    (0x9205, MaxApertureValue, Ifd::Exif),
    (0x9206, SubjectDistance, Ifd::Exif),
    (0x9207, MeteringMode, Ifd::Exif),
    (0x9208, LightSource, Ifd::Exif),
    (0x9209, Flash, Ifd::Exif),
    (0x920A, FocalLength, Ifd::Exif),
    (0x9214, SubjectArea, Ifd::Exif),
    (0xA20B, FlashEnergy, Ifd::Exif),
    (0xA20C, SpatialFrequencyResponse, Ifd::Exif),
    (0xA20E, FocalPlaneXResolution, Ifd::Exif),
    (0xA20F, FocalPlaneYResolution, Ifd::Exif),
    (0xA210, FocalPlaneResolutionUnit, Ifd::Exif),
    (0xA214, SubjectLocation, Ifd::Exif),
    (0xA215, ExposureIndex, Ifd::Exif),
    (0xA217, SensingMethod, Ifd::Exif),
    (0xA300, FileSource, Ifd::Exif),
    (0xA301, SceneType, Ifd::Exif),
    (0xA302, CFAPattern, Ifd::Exif),
    (0xA401, CustomRendered, Ifd::Exif),
    (0xA402, ExposureMode, Ifd::Exif),
    (0xA403, WhiteBalance, Ifd::Exif),
    (0xA404, DigitalZoomRatio, Ifd::Exif),
    (0xA405, FocalLengthIn35mmFilm, Ifd::Exif),
    (0xA406, SceneCaptureType, Ifd::Exif),
    (0xA407, GainControl, Ifd::Exif),
    (0xA408, Contrast, Ifd::Exif),
    (0xA409, Saturation, Ifd::Exif),
    (0xA40A, Sharpness, Ifd::Exif),
    (0xA40B, DeviceSettingDescription, Ifd::Exif),
    (0xA40C, SubjectDistanceRange, Ifd::Exif),
    // Shooting situation
    (0x9400, Temperature, Ifd::Exif),
    (0x9401, Humidity, Ifd::Exif),
    (0x9402, Pressure, Ifd::Exif),
    (0x9403, WaterDepth, Ifd::Exif),
    (0x9404, Acceleration, Ifd::Exif),
    (0x9405, CameraElevationAngle, Ifd::Exif),
    // Other
    (0xA420, ImageUniqueID, Ifd::Exif),
    (0xA430, CameraOwnerName, Ifd::Exif),
    (0xA431, BodySerialNumber, Ifd::Exif),
    (0xA432, LensSpecification, Ifd::Exif),
    (0xA433, LensMake, Ifd::Exif),
    (0xA434, LensModel, Ifd::Exif),
    (0xA435, LensSerialNumber, Ifd::Exif),
    (0xA005, InteroperabilityIfdPointer, Ifd::Exif),

    // GPS
    (0x00, GPSVersionID, Ifd::Gps),
    (0x01, GPSLatitudeRef, Ifd::Gps),
    (0x02, GPSLatitude, Ifd::Gps),
    (0x03, GPSLongitudeRef, Ifd::Gps),
    (0x04, GPSLongitude, Ifd::Gps),
    (0x05, GPSAltitudeRef, Ifd::Gps),
    (0x06, GPSAltitude, Ifd::Gps),
    (0x07, GPSTimeStamp, Ifd::Gps),
    (0x08, GPSSatellites, Ifd::Gps),
    (0x09, GPSStatus, Ifd::Gps),
    (0x0A, GPSMeasureMode, Ifd::Gps),
    (0x0B, GPSDOP, Ifd::Gps),
    (0x0C, GPSSpeedRef, Ifd::Gps),
    (0x0D, GPSSpeed, Ifd::Gps),
    (0x0E, GPSTrackRef, Ifd::Gps),
    (0x0F, GPSTrack, Ifd::Gps),
    (0x10, GPSImgDirectionRef, Ifd::Gps),
    (0x11, GPSImgDirection, Ifd::Gps),
    (0x12, GPSMapDatum, Ifd::Gps),
    (0x13, GPSDestLatitudeRef, Ifd::Gps),
    (0x14, GPSDestLatitude, Ifd::Gps),
    (0x15, GPSDestLongitudeRef, Ifd::Gps),
    (0x16, GPSDestLongitude, Ifd::Gps),
    (0x17, GPSDestBearingRef, Ifd::Gps),
    (0x18, GPSDestBearing, Ifd::Gps),
    (0x19, GPSDestDistanceRef, Ifd::Gps),
    (0x1A, GPSDestDistance, Ifd::Gps),
    (0x1B, GPSProcessingMethod, Ifd::Gps),
    (0x1C, GPSAreaInformation, Ifd::Gps),
    /// Date in the format `YYYY:MM:DD`
    (0x1D, GPSDateStamp, Ifd::Gps),
    (0x1E, GPSDifferential, Ifd::Gps),
    (0x1F, GPSHPositioningError, Ifd::Gps),

    // Interoperability
    (0x01, InteroperabilityIndex, Ifd::Interoperability),
    (0x02, InteroperabilityVersion, Ifd::Interoperability),
];
