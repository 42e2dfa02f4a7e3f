crate::utils::maybe_convertible_enum!(
    #[repr(u16)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    /// Orientation of the camera relative to the scene
    ///
    /// Stored in the Exif field `Orientation` (0x0112).
    pub enum Orientation {
        Horizontal = 1,
        MirrorHorizontal = 2,
        Rotate180 = 3,
        MirrorVertical = 4,
        MirrorHorizontalRotate270 = 5,
        Rotate90 = 6,
        MirrorHorizontalRotate90 = 7,
        Rotate270 = 8,
    }
);

impl Orientation {
    /// Clockwise rotation in degrees that has to be applied to display the
    /// image correctly
    ///
    /// ```
    /// # use civetta_common::orientation::Orientation;
    /// assert_eq!(Orientation::Rotate90.rotation(), 90);
    /// assert_eq!(Orientation::MirrorVertical.rotation(), 180);
    /// ```
    pub fn rotation(self) -> u16 {
        match self {
            Self::Horizontal | Self::MirrorHorizontal => 0,
            Self::Rotate90 | Self::MirrorHorizontalRotate90 => 90,
            Self::Rotate180 | Self::MirrorVertical => 180,
            Self::Rotate270 | Self::MirrorHorizontalRotate270 => 270,
        }
    }

    /// If the image has to be mirrored horizontally before rotating
    pub fn mirrored(self) -> bool {
        matches!(
            self,
            Self::MirrorHorizontal
                | Self::MirrorVertical
                | Self::MirrorHorizontalRotate90
                | Self::MirrorHorizontalRotate270
        )
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Horizontal => "Horizontal",
            Self::MirrorHorizontal => "Mirror horizontal",
            Self::Rotate180 => "Rotate 180",
            Self::MirrorVertical => "Mirror vertical",
            Self::MirrorHorizontalRotate270 => "Mirror horizontal and rotate 270 CW",
            Self::Rotate90 => "Rotate 90 CW",
            Self::MirrorHorizontalRotate90 => "Mirror horizontal and rotate 90 CW",
            Self::Rotate270 => "Rotate 270 CW",
        };
        f.write_str(s)
    }
}
