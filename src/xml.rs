//! Child-append editor for XML documents.

use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::editor::FileEditor;
use crate::error::{EditorError, Result};
use crate::validate;

const EXTENSIONS: &[&str] = &["xml"];

/// Indent character for (re)serialized documents.
const INDENT_CHAR: u8 = b'\t';

/// Payload for an XML update: the new element's name and text content.
#[derive(Debug, Clone, Copy)]
pub struct ChildElement<'a> {
    pub name: &'a str,
    pub text: &'a str,
}

/// Editor for `.xml` files.
///
/// `create` writes a document holding a declaration and one empty root
/// element. `update` appends one child element (with a text node) as the
/// root's last child. Every write re-serializes the document with tab
/// indentation, so surrounding whitespace is normalized while structure,
/// text, and attributes are kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlEditor;

impl XmlEditor {
    pub fn new() -> Self {
        XmlEditor
    }
}

impl FileEditor for XmlEditor {
    type CreateSpec<'a> = &'a str;
    type UpdateSpec<'a> = ChildElement<'a>;

    fn accepted_extensions(&self) -> &'static [&'static str] {
        EXTENSIONS
    }

    fn check_signature(&self, path: &Path) -> Result<()> {
        validate::require_text_content(path)
    }

    fn create(&self, directory: &Path, file_name: &str, root_name: &str) -> Result<PathBuf> {
        validate::require_directory(directory)?;
        validate::require_extension(file_name, EXTENSIONS)?;
        check_element_name(root_name)?;

        let path = directory.join(file_name);
        validate::require_absent(&path)?;

        let mut writer = indented_writer();
        emit(&mut writer, Event::Decl(BytesDecl::new("1.0", None, None)))?;
        emit(&mut writer, Event::Empty(BytesStart::new(root_name)))?;

        fs::write(&path, finish(writer))?;
        log::debug!("created XML document {} with root `{}`", path.display(), root_name);
        Ok(path)
    }

    fn update(&self, path: &Path, spec: ChildElement<'_>) -> Result<()> {
        validate::require_file(path)?;
        self.validate_signature(path)?;
        check_element_name(spec.name)?;

        let raw = fs::read(path)?;
        let content = String::from_utf8(raw)
            .map_err(|_| malformed(path, "document is not valid UTF-8"))?;
        let document = append_child(path, &content, spec)?;
        fs::write(path, document)?;

        log::debug!("appended `{}` element to {}", spec.name, path.display());
        Ok(())
    }
}

/// Re-serialize `content` with the new child inserted as the root's last
/// child. Fails without producing output unless the input is a
/// well-formed single-root document.
fn append_child(path: &Path, content: &str, spec: ChildElement<'_>) -> Result<Vec<u8>> {
    let mut reader = Reader::from_str(content);
    let mut writer = indented_writer();

    // The declaration is rewritten (and added when missing), so output
    // formatting never depends on the input's.
    emit(&mut writer, Event::Decl(BytesDecl::new("1.0", None, None)))?;

    let mut depth = 0usize;
    let mut root_seen = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if depth == 0 {
                    if root_seen {
                        return Err(malformed(path, "content after the root element"));
                    }
                    root_seen = true;
                }
                depth += 1;
                emit(&mut writer, Event::Start(e))?;
            }
            Ok(Event::End(e)) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| malformed(path, "unexpected closing tag"))?;
                if depth == 0 {
                    write_child(&mut writer, spec)?;
                }
                emit(&mut writer, Event::End(e))?;
            }
            Ok(Event::Empty(e)) => {
                if depth == 0 {
                    if root_seen {
                        return Err(malformed(path, "content after the root element"));
                    }
                    root_seen = true;
                    // An empty root becomes a start/end pair to hold its
                    // first child.
                    let end = e.to_end().into_owned();
                    emit(&mut writer, Event::Start(e))?;
                    write_child(&mut writer, spec)?;
                    emit(&mut writer, Event::End(end))?;
                } else {
                    emit(&mut writer, Event::Empty(e))?;
                }
            }
            Ok(Event::Text(e)) => {
                // Whitespace-only text is dropped and re-created by the
                // indenting writer.
                if is_whitespace(&e) {
                    continue;
                }
                if depth == 0 {
                    return Err(malformed(path, "text outside the root element"));
                }
                emit(&mut writer, Event::Text(e))?;
            }
            Ok(Event::Decl(_)) => {}
            Ok(Event::Eof) => {
                if depth != 0 {
                    return Err(malformed(path, "unexpected end of document"));
                }
                break;
            }
            Ok(e) => {
                emit(&mut writer, e)?;
            }
            Err(e) => return Err(malformed(path, e.to_string())),
        }
    }

    if !root_seen {
        return Err(malformed(path, "no root element"));
    }
    Ok(finish(writer))
}

/// Write `<name>text</name>` with the text escaped.
fn write_child(writer: &mut Writer<Cursor<Vec<u8>>>, spec: ChildElement<'_>) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new(spec.name)))?;
    emit(writer, Event::Text(BytesText::new(spec.text)))?;
    emit(writer, Event::End(BytesEnd::new(spec.name)))?;
    Ok(())
}

fn indented_writer() -> Writer<Cursor<Vec<u8>>> {
    Writer::new_with_indent(Cursor::new(Vec::new()), INDENT_CHAR, 1)
}

fn emit(writer: &mut Writer<Cursor<Vec<u8>>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| EditorError::Io(io::Error::other(e)))
}

/// Take the serialized bytes out of the writer, with a trailing newline.
fn finish(writer: Writer<Cursor<Vec<u8>>>) -> Vec<u8> {
    let mut bytes = writer.into_inner().into_inner();
    bytes.push(b'\n');
    bytes
}

fn malformed(path: &Path, message: impl Into<String>) -> EditorError {
    EditorError::MalformedXml {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

fn is_whitespace(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| b.is_ascii_whitespace())
}

/// Conservative form of the XML name rules: a letter or underscore,
/// then letters, ASCII digits, `-`, `.`, and `_`.
fn check_element_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => is_name_start(first) && chars.all(is_name_char),
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(EditorError::InvalidElementName(name.to_string()))
    }
}

fn is_name_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c == '-' || c == '.' || c.is_ascii_digit()
}
