use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use atfml_core::{
    AccessTransform, AccessTransformSet, ClassEntry, SignatureFactory, StructuralSignatures,
};

use crate::error::{ReadError, Result};
use crate::spec::parse_access_transform;

const COMMENT_PREFIX: char = '#';
const WILDCARD: char = '*';
const METHOD_START: char = '(';

/// Reader for the FML access transformer format.
///
/// Each non-blank line is `<spec> <class> [<member>]`, where `<member>` is a
/// field name, `name(descriptor)` for a method, `*` for every field or `*()`
/// for every method. `#` starts a comment that runs to the end of the line.
///
/// Wildcards only reach members that earlier lines already named for the
/// class; they are not remembered for members that show up afterwards.
#[derive(Debug, Clone, Default)]
pub struct FmlReader<F = StructuralSignatures> {
    signatures: F,
}

impl FmlReader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: SignatureFactory> FmlReader<F> {
    /// Use `signatures` to build the keys for method lines.
    pub fn with_signatures(signatures: F) -> Self {
        Self { signatures }
    }

    /// Read every line of `reader` into `set`.
    ///
    /// Stops at the first bad line. Lines before it stay merged into `set`;
    /// parse into a scratch set and [`merge`](AccessTransformSet::merge) it
    /// afterwards if that is not wanted.
    pub fn read_into<R: BufRead>(&self, reader: R, set: &mut AccessTransformSet) -> Result<()> {
        for (index, line) in reader.lines().enumerate() {
            self.read_line(index + 1, &line?, set)?;
        }
        Ok(())
    }

    fn read_line(&self, number: usize, line: &str, set: &mut AccessTransformSet) -> Result<()> {
        let content = strip_comment(line).trim();
        if content.is_empty() {
            return Ok(());
        }

        let parts: Vec<&str> = content.split_whitespace().collect();
        let (spec, class_name, member) = match parts.as_slice() {
            [spec, class_name] => (*spec, *class_name, None),
            [spec, class_name, member] => (*spec, *class_name, Some(*member)),
            _ => {
                return Err(ReadError::MalformedLine {
                    line: number,
                    content: content.to_owned(),
                });
            }
        };

        let transform = parse_access_transform(spec).map_err(|source| ReadError::InvalidSpec {
            line: number,
            content: content.to_owned(),
            source,
        })?;

        let class = set.get_or_create_class(class_name);
        match member {
            None => class.merge_class(transform),
            Some(member) => self.merge_member(class, member, transform),
        }
        Ok(())
    }

    fn merge_member(&self, class: &mut ClassEntry, member: &str, transform: AccessTransform) {
        let method_start = member.find(METHOD_START);
        if member.starts_with(WILDCARD) {
            // Only the leading '*' and the presence of '(' matter here.
            if method_start.is_some() {
                class.merge_all_methods(transform);
            } else {
                class.merge_all_fields(transform);
            }
            return;
        }

        match method_start {
            Some(i) => {
                let (name, descriptor) = member.split_at(i);
                class.merge_method(self.signatures.of(name, descriptor), transform);
            }
            None => class.merge_field(member, transform),
        }
    }
}

fn strip_comment(line: &str) -> &str {
    line.split_once(COMMENT_PREFIX)
        .map_or(line, |(content, _)| content)
}

/// Read FML lines from `reader` into `set` with structural method keys.
pub fn read<R: BufRead>(reader: R, set: &mut AccessTransformSet) -> Result<()> {
    FmlReader::new().read_into(reader, set)
}

/// Read FML lines from a string.
pub fn read_str(source: &str, set: &mut AccessTransformSet) -> Result<()> {
    read(source.as_bytes(), set)
}

/// Open and read an FML file.
pub fn read_path(path: &Path, set: &mut AccessTransformSet) -> Result<()> {
    let file = File::open(path)?;
    let before = set.len();
    read(BufReader::new(file), set)?;
    log::debug!(
        "{}: {} classes ({} new)",
        path.display(),
        set.len(),
        set.len() - before
    );
    Ok(())
}
