use std::path::Path;

use fitsio::hdu::{FitsHdu, HduInfo};
use fitsio::images::ImageType;
use fitsio::FitsFile;
use ndarray::Array2;

use crate::detection::SampleKind;
use crate::error::{FitsPhotError, Result};

/// Sample type of the primary data unit as reported by cfitsio.
///
/// cfitsio folds the unsigned BZERO convention into the type, so a BITPIX 16
/// image with `BZERO = 32768` reports as `U16`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bitpix {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    F32,
    F64,
}

impl Bitpix {
    fn from_image_type(image_type: &ImageType) -> Self {
        match image_type {
            ImageType::Byte => Self::I8,
            ImageType::UnsignedByte => Self::U8,
            ImageType::Short => Self::I16,
            ImageType::UnsignedShort => Self::U16,
            ImageType::Long => Self::I32,
            ImageType::UnsignedLong => Self::U32,
            ImageType::LongLong => Self::I64,
            ImageType::Float => Self::F32,
            ImageType::Double => Self::F64,
        }
    }

    /// On-disk BITPIX value.
    pub fn code(self) -> i64 {
        match self {
            Self::I8 | Self::U8 => 8,
            Self::I16 | Self::U16 => 16,
            Self::I32 | Self::U32 => 32,
            Self::I64 => 64,
            Self::F32 => -32,
            Self::F64 => -64,
        }
    }

    pub fn is_integer(self) -> bool {
        !matches!(self, Self::F32 | Self::F64)
    }
}

/// Primary header keywords used for scaling and display.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FitsHeader {
    pub bzero: Option<f64>,
    pub bscale: Option<f64>,
    pub blank: Option<i64>,
    pub object: Option<String>,
    pub telescope: Option<String>,
    pub instrument: Option<String>,
    pub date_obs: Option<String>,
}

impl FitsHeader {
    fn read(hdu: &FitsHdu, fptr: &mut FitsFile) -> Self {
        Self {
            bzero: read_key_optional(hdu, fptr, "BZERO"),
            bscale: read_key_optional(hdu, fptr, "BSCALE"),
            blank: read_key_optional(hdu, fptr, "BLANK"),
            object: read_key_optional(hdu, fptr, "OBJECT"),
            telescope: read_key_optional(hdu, fptr, "TELESCOP"),
            instrument: read_key_optional(hdu, fptr, "INSTRUME"),
            date_obs: read_key_optional(hdu, fptr, "DATE-OBS"),
        }
    }

    /// Physical value of a stored integer sample.
    fn scale(&self, raw: i64) -> f64 {
        self.bzero.unwrap_or(0.0) + self.bscale.unwrap_or(1.0) * raw as f64
    }
}

/// Primary image of a FITS file.
#[derive(Clone, Debug)]
pub struct FitsImage {
    pub header: FitsHeader,
    pub bitpix: Bitpix,
    /// Physical pixel values, shape = (NAXIS2, NAXIS1). Blank samples are NaN.
    pub data: Array2<f64>,
}

impl FitsImage {
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Integer images keep integer levels unless BSCALE/BZERO make them
    /// fractional.
    pub fn sample_kind(&self) -> SampleKind {
        let bscale = self.header.bscale.unwrap_or(1.0);
        let bzero = self.header.bzero.unwrap_or(0.0);
        if self.bitpix.is_integer() && bscale == 1.0 && bzero.fract() == 0.0 {
            SampleKind::Integer
        } else {
            SampleKind::Float
        }
    }
}

/// Load the primary data unit of a FITS file as a 2-D array of physical
/// values. The file is closed before this returns.
pub fn load_fits(path: &Path) -> Result<FitsImage> {
    let mut fptr = FitsFile::open(path).map_err(|e| FitsPhotError::load(path, e.to_string()))?;
    let hdu = fptr
        .primary_hdu()
        .map_err(|e| FitsPhotError::load(path, e.to_string()))?;

    let (shape, bitpix) = match &hdu.info {
        HduInfo::ImageInfo { shape, image_type } => {
            (shape.clone(), Bitpix::from_image_type(image_type))
        }
        HduInfo::TableInfo { .. } => {
            return Err(FitsPhotError::load(path, "primary HDU is a table"));
        }
        HduInfo::AnyInfo => return Err(FitsPhotError::load(path, "unknown HDU type")),
    };

    let (height, width) = image_shape(&shape, path)?;
    let header = FitsHeader::read(&hdu, &mut fptr);

    let mut pixels: Vec<f64> = hdu
        .read_image(&mut fptr)
        .map_err(|e| FitsPhotError::load(path, e.to_string()))?;

    if bitpix.is_integer() {
        if let Some(blank) = header.blank {
            let blank_value = header.scale(blank);
            for p in pixels.iter_mut().filter(|p| **p == blank_value) {
                *p = f64::NAN;
            }
        }
    }

    let data = Array2::from_shape_vec((height, width), pixels)
        .map_err(|e| FitsPhotError::load(path, e.to_string()))?;

    Ok(FitsImage {
        header,
        bitpix,
        data,
    })
}

/// Resolve the cfitsio shape (slowest axis first) into `(rows, cols)`.
/// Axes beyond the second must have length 1.
fn image_shape(shape: &[usize], path: &Path) -> Result<(usize, usize)> {
    if shape.is_empty() || shape.contains(&0) {
        return Err(FitsPhotError::NoPrimaryData {
            path: path.to_path_buf(),
        });
    }
    match shape {
        [_] => Err(FitsPhotError::load(
            path,
            "primary array is 1-D, expected a 2-D image",
        )),
        [extra @ .., rows, cols] if extra.iter().all(|&n| n == 1) => Ok((*rows, *cols)),
        _ => Err(FitsPhotError::load(
            path,
            format!("primary array has shape {shape:?}, expected a 2-D image"),
        )),
    }
}

fn read_key_optional<T: fitsio::headers::ReadsKey>(
    hdu: &FitsHdu,
    fptr: &mut FitsFile,
    key: &str,
) -> Option<T> {
    hdu.read_key(fptr, key).ok()
}
