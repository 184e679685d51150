//! Recursive descent parser for grammar notation
//!
//! Builds a [`Group`] tree from grammar text, resolving `<name>` references
//! and `!unit` tokens through the compile context as it goes. There is no
//! error recovery: the first problem aborts the whole compilation.

use std::sync::Arc;

use tracing::trace;

use super::errors::{CompileResult, ErrorCode, GrammarError, GrammarErrorBuilder};
use super::memo::{MemoEntry, MemoKey, ReferenceMemo};
use super::options::CompileOptions;
use super::scanner::Scanner;
use crate::base::constants::*;
use crate::base::{ElementId, IdAllocator, Multiplicity, Name};
use crate::grammar::{
    ElementMeta, GrammarElement, Group, GroupType, Literal, Reference, ReferenceTarget, Unit,
};
use crate::lookup::{PropertyLookup, UnitLookup};

/// State shared by every parser of one compilation: the top-level grammar
/// and all the referenced grammars compiled on its behalf.
pub(crate) struct CompileContext<'l> {
    pub properties: &'l dyn PropertyLookup,
    pub units: &'l dyn UnitLookup,
    pub options: CompileOptions,
    pub ids: IdAllocator,
    pub memo: ReferenceMemo,
}

/// Parser for one grammar text.
pub(crate) struct GrammarParser<'s, 'c, 'l> {
    scanner: Scanner<'s>,
    ctx: &'c mut CompileContext<'l>,
    property: Option<Name>,
    strip_inherit: bool,
    /// Groups opened so far in this text; the next group's ordinal.
    groups: u32,
    /// The last word was a dropped `inherit`; suffixes up to the next
    /// element belong to it and are dropped too.
    dropped_last: bool,
}

impl<'s, 'c, 'l> GrammarParser<'s, 'c, 'l> {
    pub(crate) fn new(
        text: &'s str,
        ctx: &'c mut CompileContext<'l>,
        property: Option<Name>,
        strip_inherit: bool,
    ) -> Self {
        Self {
            scanner: Scanner::new(text),
            ctx,
            property,
            strip_inherit,
            groups: 0,
            dropped_last: false,
        }
    }

    /// Parse the whole text into a root group carrying `meta`.
    pub(crate) fn parse(mut self, meta: ElementMeta) -> CompileResult<Group> {
        let mut root = self.parse_group(meta, false)?;
        root.property = self.property.clone();
        Ok(root)
    }

    // =========================================================================
    // Groups
    // =========================================================================

    /// Parse elements until `]` when `nested`, or until end of input.
    fn parse_group(&mut self, meta: ElementMeta, nested: bool) -> CompileResult<Group> {
        let ordinal = self.groups;
        self.groups += 1;
        let mut group = Group::new(meta);

        loop {
            let Some(c) = self.scanner.read() else {
                if nested {
                    return Err(self
                        .error(ErrorCode::E0202, GROUP_OPEN.to_string())
                        .hint("add ']' to close the group")
                        .build());
                }
                return Ok(group);
            };

            let suffix = matches!(c, MULTIPLICITY_OPEN | CAPTURE_OPEN | '+' | '*' | '?');
            if !suffix && !c.is_whitespace() {
                self.dropped_last = false;
            }

            match c {
                c if c.is_whitespace() => {}
                GROUP_OPEN => {
                    let meta = self.child_meta(&group);
                    let child = self.parse_group(meta, true)?;
                    group.children.push(child.into());
                }
                GROUP_CLOSE => {
                    if nested {
                        return Ok(group);
                    }
                    return Err(self.error(ErrorCode::E0203, GROUP_CLOSE.to_string()).build());
                }
                '|' => {
                    if self.scanner.peek() == Some('|') {
                        self.scanner.read();
                        self.set_group_type(&mut group, GroupType::Collection)?;
                    } else {
                        self.set_group_type(&mut group, GroupType::Set)?;
                    }
                }
                '&' => {
                    if self.scanner.peek() != Some('&') {
                        return Err(self
                            .error(ErrorCode::E0101, "&")
                            .hint("use '&&' for all-in-any-order groups")
                            .build());
                    }
                    self.scanner.read();
                    self.set_group_type(&mut group, GroupType::All)?;
                }
                MULTIPLICITY_OPEN => {
                    let Some(body) = self.scanner.read_until(MULTIPLICITY_CLOSE) else {
                        return Err(self.error(ErrorCode::E0204, "{").build());
                    };
                    let multiplicity = self.parse_multiplicity(body)?;
                    self.apply_multiplicity(&mut group, multiplicity, &format!("{{{body}}}"))?;
                }
                '+' => self.apply_multiplicity(&mut group, Multiplicity::ONE_OR_MORE, "+")?,
                '*' => self.apply_multiplicity(&mut group, Multiplicity::ZERO_OR_MORE, "*")?,
                '?' => self.apply_multiplicity(&mut group, Multiplicity::OPTIONAL, "?")?,
                CAPTURE_OPEN => self.parse_capture(&mut group)?,
                REFERENCE_OPEN => {
                    let Some(name) = self.scanner.read_until(REFERENCE_CLOSE) else {
                        return Err(self
                            .error(ErrorCode::E0201, "<")
                            .hint("add '>' to close the reference")
                            .build());
                    };
                    let reference = self.resolve_reference(&group, ordinal, name.trim())?;
                    group.children.push(reference);
                }
                UNIT_SIGIL => {
                    let name = self.scanner.read_word();
                    let unit = self.resolve_unit(&group, name)?;
                    group.children.push(unit);
                }
                '\'' | '"' => {
                    let Some(text) = self.scanner.read_until(c) else {
                        return Err(self.error(ErrorCode::E0102, c.to_string()).build());
                    };
                    let literal = self.literal(&group, text, true);
                    group.children.push(literal);
                }
                REFERENCE_CLOSE | MULTIPLICITY_CLOSE | CAPTURE_CLOSE => {
                    return Err(self.error(ErrorCode::E0101, c.to_string()).build());
                }
                _ => {
                    self.scanner.backup(1);
                    let word = self.scanner.read_word();
                    if self.strip_inherit && word == INHERIT {
                        trace!(property = ?self.property, "dropping inherit from embedded grammar");
                        self.dropped_last = true;
                        continue;
                    }
                    let case_sensitive = !self.ctx.options.case_insensitive_words;
                    let literal = self.literal(&group, word, case_sensitive);
                    group.children.push(literal);
                }
            }
        }
    }

    fn set_group_type(&self, group: &mut Group, group_type: GroupType) -> CompileResult<()> {
        let current = group.group_type;
        if self.ctx.options.reject_mixed_operators
            && current != GroupType::Sequence
            && current != group_type
        {
            let operator = group_type.operator().unwrap_or_default();
            return Err(self
                .error(ErrorCode::E0501, operator)
                .message(format!(
                    "'{}' mixed with '{}' in one group",
                    operator,
                    current.operator().unwrap_or_default()
                ))
                .hint("wrap one side in '[ ]'")
                .build());
        }
        group.group_type = group_type;
        Ok(())
    }

    // =========================================================================
    // Element suffixes
    // =========================================================================

    fn parse_multiplicity(&self, body: &str) -> CompileResult<Multiplicity> {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let parsed = match parts.as_slice() {
            [n] => parse_bound(n).map(Multiplicity::exactly),
            [min, max] => {
                let min = if min.is_empty() {
                    Some(0)
                } else {
                    parse_bound(min)
                };
                let max = if max.is_empty() {
                    Some(None)
                } else {
                    parse_bound(max).map(Some)
                };
                match (min, max) {
                    (Some(min), Some(max)) => Multiplicity::range(min, max),
                    _ => None,
                }
            }
            _ => None,
        };
        parsed.ok_or_else(|| {
            self.error(ErrorCode::E0401, format!("{{{body}}}"))
                .hint("expected '{n}', '{min,max}', '{min,}' or '{,max}'")
                .build()
        })
    }

    /// Multiplicity binds to the most recent element of the current group.
    fn apply_multiplicity(
        &self,
        group: &mut Group,
        multiplicity: Multiplicity,
        token: &str,
    ) -> CompileResult<()> {
        if self.dropped_last {
            trace!(suffix = token, "dropping suffix of inherit");
            return Ok(());
        }
        match group.children.last_mut() {
            Some(last) => {
                last.meta_mut().multiplicity = multiplicity;
                Ok(())
            }
            None => Err(self.error(ErrorCode::E0402, token).build()),
        }
    }

    /// `( $name )` after an element names it.
    fn parse_capture(&mut self, group: &mut Group) -> CompileResult<()> {
        let Some(body) = self.scanner.read_until(CAPTURE_CLOSE) else {
            return Err(self.error(ErrorCode::E0205, CAPTURE_OPEN.to_string()).build());
        };
        let token = format!("({body})");
        let name = body
            .trim()
            .strip_prefix(CAPTURE_SIGIL)
            .map(str::trim)
            .filter(|name| is_capture_name(name))
            .ok_or_else(|| {
                self.error(ErrorCode::E0205, token.as_str())
                    .hint("expected '( $name )'")
                    .build()
            })?;
        if self.dropped_last {
            return Ok(());
        }
        match group.children.last_mut() {
            Some(last) => {
                last.meta_mut().name = Some(Name::new(name));
                Ok(())
            }
            None => Err(self.error(ErrorCode::E0402, token).build()),
        }
    }

    // =========================================================================
    // Leaves
    // =========================================================================

    fn child_meta(&mut self, group: &Group) -> ElementMeta {
        ElementMeta::new(self.ctx.ids.alloc(), Some(group.id()), group.children.len())
    }

    fn literal(&mut self, group: &Group, text: &str, case_sensitive: bool) -> GrammarElement {
        Literal {
            meta: self.child_meta(group),
            text: Name::new(text),
            case_sensitive,
        }
        .into()
    }

    fn resolve_unit(&mut self, group: &Group, name: &str) -> CompileResult<GrammarElement> {
        let acceptor = self.ctx.units.acceptor(name).ok_or_else(|| {
            self.error(ErrorCode::E0302, format!("{UNIT_SIGIL}{name}"))
                .message(format!("unknown unit '{name}'"))
                .build()
        })?;
        Ok(Unit {
            meta: self.child_meta(group),
            unit: Name::new(name),
            acceptor,
        }
        .into())
    }

    // =========================================================================
    // References
    // =========================================================================

    fn resolve_reference(
        &mut self,
        group: &Group,
        ordinal: u32,
        name: &str,
    ) -> CompileResult<GrammarElement> {
        let position = group.children.len();
        let key = MemoKey {
            owner: self.property.clone().unwrap_or_default(),
            group: ordinal,
            position,
            name: Name::new(name),
        };
        let mut meta = ElementMeta::new(ElementId::new(0), Some(group.id()), position);

        let target = match self.ctx.memo.get(&key).cloned() {
            Some(MemoEntry::Built(built)) => {
                trace!(reference = name, id = %built.id(), "reusing compiled reference");
                ReferenceTarget::Embedded(built)
            }
            Some(MemoEntry::Building { id, group: weak }) => {
                trace!(reference = name, %id, "recursive reference");
                meta.id = id;
                ReferenceTarget::Recursive(weak)
            }
            None => ReferenceTarget::Embedded(self.compile_reference(key, name, &meta)?),
        };
        if let ReferenceTarget::Embedded(built) = &target {
            meta.id = built.id();
        }

        Ok(Reference {
            meta,
            property: Name::new(name),
            target,
        }
        .into())
    }

    /// Compile a referenced grammar with its own parser state, sharing the
    /// id counter and memo with this compilation.
    fn compile_reference(
        &mut self,
        key: MemoKey,
        name: &str,
        occurrence: &ElementMeta,
    ) -> CompileResult<Arc<Group>> {
        let properties = self.ctx.properties;
        let Some(text) = properties.grammar(name) else {
            return Err(self
                .error(ErrorCode::E0301, format!("<{name}>"))
                .message(format!("unknown referenced grammar '{name}'"))
                .build());
        };

        let id = self.ctx.ids.alloc();
        let meta = ElementMeta::new(id, occurrence.parent, occurrence.index);
        let strip_inherit = self.ctx.options.strip_inherit;
        let property = Name::new(name);
        trace!(reference = name, owner = %key.owner, %id, "compiling referenced grammar");

        let ctx = &mut *self.ctx;
        let mut failure = None;
        let compiled = Arc::new_cyclic(|weak| {
            ctx.memo.start(key.clone(), id, weak.clone());
            let parser = GrammarParser::new(text, ctx, Some(property), strip_inherit);
            match parser.parse(meta.clone()) {
                Ok(group) => group,
                Err(err) => {
                    failure = Some(err);
                    Group::new(meta)
                }
            }
        });
        if let Some(err) = failure {
            return Err(err);
        }

        self.ctx.memo.finish(key, Arc::clone(&compiled));
        Ok(compiled)
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&self, code: ErrorCode, token: impl Into<String>) -> GrammarErrorBuilder {
        GrammarError::builder(code)
            .property(self.property.clone())
            .token(token)
            .consumed(self.scanner.consumed())
            .offset(self.scanner.offset())
    }
}

/// Plain decimal digits only; `u32::from_str` also accepts a leading `+`.
fn parse_bound(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn is_capture_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || unicode_ident::is_xid_start(c) => {}
        _ => return false,
    }
    chars.all(|c| c == '-' || unicode_ident::is_xid_continue(c))
}
