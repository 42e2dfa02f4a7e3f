#![allow(dead_code)]

//! Builder for synthetic TIFF data

pub use civetta_exif::internal::*;

pub struct E {
    pub tag: u16,
    pub data_type: u16,
    pub count: u32,
    pub value: V,
}

pub enum V {
    /// Encoded values, inline if at most four bytes
    Bytes(Vec<u8>),
    /// Pointer to a sub-directory
    Dir(Vec<E>),
    /// Value field as given, independent of count and type
    Raw([u8; 4]),
}

#[derive(Clone, Copy)]
pub struct TiffBuilder {
    pub big_endian: bool,
}

impl TiffBuilder {
    pub fn le() -> Self {
        Self { big_endian: false }
    }

    pub fn be() -> Self {
        Self { big_endian: true }
    }

    pub fn u16(&self, v: u16) -> [u8; 2] {
        if self.big_endian {
            v.to_be_bytes()
        } else {
            v.to_le_bytes()
        }
    }

    pub fn u32(&self, v: u32) -> [u8; 4] {
        if self.big_endian {
            v.to_be_bytes()
        } else {
            v.to_le_bytes()
        }
    }

    pub fn ascii(&self, tag: u16, s: &str) -> E {
        let mut data = s.as_bytes().to_vec();
        data.push(0);
        E {
            tag,
            data_type: 2,
            count: data.len() as u32,
            value: V::Bytes(data),
        }
    }

    pub fn short(&self, tag: u16, v: u16) -> E {
        self.shorts(tag, &[v])
    }

    pub fn shorts(&self, tag: u16, v: &[u16]) -> E {
        E {
            tag,
            data_type: 3,
            count: v.len() as u32,
            value: V::Bytes(v.iter().flat_map(|x| self.u16(*x)).collect()),
        }
    }

    pub fn long(&self, tag: u16, v: u32) -> E {
        self.longs(tag, &[v])
    }

    pub fn longs(&self, tag: u16, v: &[u32]) -> E {
        E {
            tag,
            data_type: 4,
            count: v.len() as u32,
            value: V::Bytes(v.iter().flat_map(|x| self.u32(*x)).collect()),
        }
    }

    pub fn rational(&self, tag: u16, n: u32, d: u32) -> E {
        self.rationals(tag, &[(n, d)])
    }

    pub fn rationals(&self, tag: u16, v: &[(u32, u32)]) -> E {
        E {
            tag,
            data_type: 5,
            count: v.len() as u32,
            value: V::Bytes(
                v.iter()
                    .flat_map(|(n, d)| [self.u32(*n), self.u32(*d)])
                    .flatten()
                    .collect(),
            ),
        }
    }

    pub fn srational(&self, tag: u16, n: i32, d: i32) -> E {
        E {
            tag,
            data_type: 10,
            count: 1,
            value: V::Bytes(
                [self.u32(n as u32), self.u32(d as u32)]
                    .into_iter()
                    .flatten()
                    .collect(),
            ),
        }
    }

    pub fn undefined(&self, tag: u16, v: &[u8]) -> E {
        E {
            tag,
            data_type: 7,
            count: v.len() as u32,
            value: V::Bytes(v.to_vec()),
        }
    }

    pub fn pointer(&self, tag: u16, entries: Vec<E>) -> E {
        E {
            tag,
            data_type: 4,
            count: 1,
            value: V::Dir(entries),
        }
    }

    /// TIFF data with the directories chained in the given order
    pub fn build(&self, chain: Vec<Vec<E>>) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(if self.big_endian { b"MM" } else { b"II" });
        out.extend_from_slice(&self.u16(42));
        // Offset of first directory, patched below
        out.extend_from_slice(&[0; 4]);

        let mut next_field = 4;
        for dir in &chain {
            let offset = out.len() as u32;
            self.patch(&mut out, next_field, offset);
            next_field = self.write_dir(&mut out, dir);
        }

        out
    }

    fn patch(&self, out: &mut [u8], position: usize, value: u32) {
        out[position..position + 4].copy_from_slice(&self.u32(value));
    }

    /// Writes the directory and returns the position of its next field
    fn write_dir(&self, out: &mut Vec<u8>, entries: &[E]) -> usize {
        let start = out.len();
        out.extend_from_slice(&self.u16(entries.len() as u16));
        out.resize(start + 2 + entries.len() * 12 + 4, 0);
        let next_field = start + 2 + entries.len() * 12;

        for (i, e) in entries.iter().enumerate() {
            let pos = start + 2 + i * 12;
            out[pos..pos + 2].copy_from_slice(&self.u16(e.tag));
            out[pos + 2..pos + 4].copy_from_slice(&self.u16(e.data_type));
            out[pos + 4..pos + 8].copy_from_slice(&self.u32(e.count));

            match &e.value {
                V::Bytes(b) if b.len() <= 4 => {
                    out[pos + 8..pos + 8 + b.len()].copy_from_slice(b);
                }
                V::Bytes(b) => {
                    let offset = out.len() as u32;
                    out.extend_from_slice(b);
                    if out.len() % 2 == 1 {
                        out.push(0);
                    }
                    self.patch(out, pos + 8, offset);
                }
                V::Dir(sub) => {
                    let offset = out.len() as u32;
                    self.write_dir(out, sub);
                    self.patch(out, pos + 8, offset);
                }
                V::Raw(raw) => {
                    out[pos + 8..pos + 12].copy_from_slice(raw);
                }
            }
        }

        next_field
    }
}

/// Typical camera data with Exif and GPS directories
pub fn camera(b: TiffBuilder) -> Vec<u8> {
    b.build(vec![
        vec![
            b.ascii(0x010F, "NIKON CORPORATION"),
            b.ascii(0x0110, "NIKON D750"),
            b.short(0x0112, 6),
            b.ascii(0x0132, "2024:05:01 10:00:00"),
            b.pointer(
                0x8769,
                vec![
                    b.rational(0x829A, 1, 250),
                    b.rational(0x829D, 56, 10),
                    b.short(0x8827, 400),
                    b.ascii(0x9003, "2024:05:01 09:30:15"),
                    b.ascii(0x9011, "+02:00"),
                    b.ascii(0x9291, "250"),
                    b.rational(0x9202, 4, 1),
                    b.pointer(0xA005, vec![b.ascii(0x0001, "R98")]),
                ],
            ),
            b.pointer(0x8825, vec![b.ascii(0x001D, "2024:05:01")]),
        ],
        vec![b.long(0x0201, 4096), b.long(0x0202, 1234)],
    ])
}
