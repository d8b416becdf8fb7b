//! Visitor API.

use std::fmt::Write;

use super::*;

/// Receives a depth-first walk over a document. `name` is `None` for list elements.
pub trait NbtVisitor {
    type Err;

    fn visit_value(&mut self, name: Option<&str>, value: &NbtValue) -> Result<(), Self::Err>;
    fn enter_compound(
        &mut self,
        name: Option<&str>,
        compound: &NbtCompound,
    ) -> Result<(), Self::Err>;
    fn leave_compound(
        &mut self,
        name: Option<&str>,
        compound: &NbtCompound,
    ) -> Result<(), Self::Err>;
    fn enter_list(&mut self, name: Option<&str>, list: &NbtList) -> Result<(), Self::Err>;
    fn leave_list(&mut self, name: Option<&str>, list: &NbtList) -> Result<(), Self::Err>;
}

pub(crate) fn walk_compound<V: NbtVisitor>(
    name: Option<&str>,
    compound: &NbtCompound,
    visitor: &mut V,
) -> Result<(), V::Err> {
    visitor.enter_compound(name, compound)?;
    for (child_name, child) in compound {
        walk_value(Some(child_name), child, visitor)?;
    }
    visitor.leave_compound(name, compound)
}

fn walk_list<V: NbtVisitor>(
    name: Option<&str>,
    list: &NbtList,
    visitor: &mut V,
) -> Result<(), V::Err> {
    visitor.enter_list(name, list)?;
    for element in list {
        walk_value(None, element, visitor)?;
    }
    visitor.leave_list(name, list)
}

fn walk_value<V: NbtVisitor>(
    name: Option<&str>,
    value: &NbtValue,
    visitor: &mut V,
) -> Result<(), V::Err> {
    match value {
        NbtValue::Compound(compound) => walk_compound(name, compound, visitor),
        NbtValue::List(list) => walk_list(name, list, visitor),
        value => visitor.visit_value(name, value),
    }
}

pub struct NbtPrettyPrinter<'w, W>
where
    W: Write,
{
    writer: &'w mut W,
    indent_size: usize,
    indent_level: usize,
}

impl<'w, W> NbtPrettyPrinter<'w, W>
where
    W: Write,
{
    pub fn new(writer: &'w mut W, indent_size: usize) -> Self {
        Self {
            writer,
            indent_size,
            indent_level: 0,
        }
    }

    fn write_indent(&mut self) -> std::fmt::Result {
        for _ in 0..(self.indent_size * self.indent_level) {
            self.writer.write_char(' ')?;
        }
        Ok(())
    }

    fn write_name(&mut self, name: Option<&str>) -> std::fmt::Result {
        match name {
            Some(name) if !name.is_empty() => write!(self.writer, "{} ", name),
            _ => Ok(()),
        }
    }
}

impl<'w, W> NbtVisitor for NbtPrettyPrinter<'w, W>
where
    W: Write,
{
    type Err = std::fmt::Error;

    fn visit_value(&mut self, name: Option<&str>, value: &NbtValue) -> Result<(), Self::Err> {
        self.write_indent()?;
        if let Some(name) = name {
            write!(self.writer, "{}: ", name)?;
        }
        writeln!(self.writer, "{}", value)
    }

    fn enter_compound(
        &mut self,
        name: Option<&str>,
        _compound: &NbtCompound,
    ) -> Result<(), Self::Err> {
        self.write_indent()?;
        self.write_name(name)?;
        self.indent_level += 1;
        writeln!(self.writer, "{{")
    }

    fn leave_compound(
        &mut self,
        _name: Option<&str>,
        _compound: &NbtCompound,
    ) -> Result<(), Self::Err> {
        self.indent_level -= 1;
        self.write_indent()?;
        writeln!(self.writer, "}}")
    }

    fn enter_list(&mut self, name: Option<&str>, _list: &NbtList) -> Result<(), Self::Err> {
        self.write_indent()?;
        self.write_name(name)?;
        self.indent_level += 1;
        writeln!(self.writer, "[")
    }

    fn leave_list(&mut self, _name: Option<&str>, _list: &NbtList) -> Result<(), Self::Err> {
        self.indent_level -= 1;
        self.write_indent()?;
        writeln!(self.writer, "]")
    }
}
