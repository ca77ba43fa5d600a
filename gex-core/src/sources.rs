//! Input source resolution.

use std::{
    collections::BTreeSet,
    io::{self, BufRead},
    path::PathBuf,
};

/// Reads an index of sources, one per line.
pub fn read_index<R>(reader: &mut R) -> io::Result<Vec<String>>
where
    R: BufRead,
{
    let mut line = String::new();
    let mut srcs = Vec::new();

    loop {
        line.clear();

        if read_line(reader, &mut line)? == 0 {
            break;
        }

        srcs.push(line.clone());
    }

    Ok(srcs)
}

/// Trims, deduplicates, and sorts a list of sources.
///
/// Blank entries are dropped.
pub fn resolve<I, S>(srcs: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let srcs: BTreeSet<String> = srcs
        .into_iter()
        .map(|src| src.as_ref().trim().to_string())
        .filter(|src| !src.is_empty())
        .collect();

    srcs.into_iter().map(PathBuf::from).collect()
}

fn read_line<R>(reader: &mut R, buf: &mut String) -> io::Result<usize>
where
    R: BufRead,
{
    const LINE_FEED: char = '\n';
    const CARRIAGE_RETURN: char = '\r';

    match reader.read_line(buf)? {
        0 => Ok(0),
        n => {
            if buf.ends_with(LINE_FEED) {
                buf.pop();

                if buf.ends_with(CARRIAGE_RETURN) {
                    buf.pop();
                }
            }

            Ok(n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_index() -> io::Result<()> {
        let mut reader = &b"in/a.s0.txt\r\nin/b.s1.txt\n\nin/c.s2.txt"[..];
        let actual = read_index(&mut reader)?;
        assert_eq!(actual, ["in/a.s0.txt", "in/b.s1.txt", "", "in/c.s2.txt"]);
        Ok(())
    }

    #[test]
    fn test_resolve() {
        let srcs = [
            "in/b.s1.txt",
            "  in/a.s0.txt\t",
            "",
            "in/b.s1.txt",
            "   ",
            "in/a.s0.txt",
        ];

        let actual = resolve(srcs);
        let expected = [PathBuf::from("in/a.s0.txt"), PathBuf::from("in/b.s1.txt")];
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_resolve_with_files_and_index() -> io::Result<()> {
        let files = vec![String::from("z.s2.txt"), String::from("a.s0.txt")];
        let mut reader = &b"m.s1.txt\na.s0.txt\nz.s2.txt\n"[..];

        let mut srcs = files;
        srcs.extend(read_index(&mut reader)?);

        let actual = resolve(srcs);
        let expected = [
            PathBuf::from("a.s0.txt"),
            PathBuf::from("m.s1.txt"),
            PathBuf::from("z.s2.txt"),
        ];
        assert_eq!(actual, expected);

        Ok(())
    }

    #[test]
    fn test_read_line() -> io::Result<()> {
        fn t(buf: &mut String, mut data: &[u8], expected: &str) -> io::Result<()> {
            buf.clear();
            read_line(&mut data, buf)?;
            assert_eq!(buf, expected);
            Ok(())
        }

        let mut buf = String::new();

        t(&mut buf, b"a.s0.txt\n", "a.s0.txt")?;
        t(&mut buf, b"a.s0.txt\r\n", "a.s0.txt")?;
        t(&mut buf, b"a.s0.txt", "a.s0.txt")?;

        Ok(())
    }
}
