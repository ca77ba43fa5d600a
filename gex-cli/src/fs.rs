use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use flate2::bufread::MultiGzDecoder;

/// Opens a file for buffered reading, decompressing it if it is gzipped.
pub fn open<P>(src: P) -> io::Result<Box<dyn BufRead>>
where
    P: AsRef<Path>,
{
    let mut reader = File::open(src.as_ref()).map(BufReader::new)?;

    if is_gzip(&mut reader)? {
        let decoder = MultiGzDecoder::new(reader);
        Ok(Box::new(BufReader::new(decoder)))
    } else {
        Ok(Box::new(reader))
    }
}

fn is_gzip<R>(reader: &mut R) -> io::Result<bool>
where
    R: BufRead,
{
    const MAGIC_NUMBER: [u8; 2] = [0x1f, 0x8b];
    let buf = reader.fill_buf()?;
    Ok(buf.starts_with(&MAGIC_NUMBER))
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};

    use flate2::{Compression, write::GzEncoder};

    use super::*;

    #[test]
    fn test_is_gzip() -> io::Result<()> {
        assert!(is_gzip(&mut &b"\x1f\x8b\x08\x00"[..])?);
        assert!(!is_gzip(&mut &b"gene\traw_counts\n"[..])?);
        assert!(!is_gzip(&mut &b""[..])?);
        Ok(())
    }

    #[test]
    fn test_open() -> io::Result<()> {
        const DATA: &[u8] = b"gene\traw_counts\ng0\t8\n";

        let dir = tempfile::tempdir()?;

        let src = dir.path().join("a.s0.txt");
        std::fs::write(&src, DATA)?;

        let mut buf = Vec::new();
        open(&src)?.read_to_end(&mut buf)?;
        assert_eq!(buf, DATA);

        let src = dir.path().join("a.s0.txt.gz");
        let mut encoder = GzEncoder::new(File::create(&src)?, Compression::default());
        encoder.write_all(DATA)?;
        encoder.finish()?;

        buf.clear();
        open(&src)?.read_to_end(&mut buf)?;
        assert_eq!(buf, DATA);

        Ok(())
    }
}
