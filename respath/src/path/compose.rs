//! Path composition.
//!
//! Joining appends a right-hand operand to a base path. The base keeps its
//! protocol, drive and absoluteness; its filename, if any, becomes the last
//! directory; the operand's directory segments are then resolved onto that
//! chain, and the operand supplies the new filename and portion.

use std::ops::{Div, DivAssign};

use crate::path::parse::{self, Fragment};
use crate::path::types::ResourcePath;
use crate::platform::PlatformPolicy;

/// Anything that can appear on the right-hand side of a join.
///
/// String-like operands are tokenized without resolving `..`, so leading
/// `..` segments cancel directories of the base. A protocol or drive on the
/// right-hand side is ignored.
pub trait JoinOperand {
    /// Convert the operand to an unresolved fragment.
    fn to_fragment<'a>(&'a self, policy: &PlatformPolicy) -> Fragment<'a>;
}

impl JoinOperand for str {
    fn to_fragment<'a>(&'a self, policy: &PlatformPolicy) -> Fragment<'a> {
        parse::tokenize(self, policy)
    }
}

impl JoinOperand for String {
    fn to_fragment<'a>(&'a self, policy: &PlatformPolicy) -> Fragment<'a> {
        parse::tokenize(self, policy)
    }
}

impl JoinOperand for ResourcePath {
    fn to_fragment<'a>(&'a self, _policy: &PlatformPolicy) -> Fragment<'a> {
        Fragment {
            protocol: Some(self.protocol()),
            drive: self.drive(),
            absolute: self.is_absolute(),
            segments: self.directories().iter().map(String::as_str).collect(),
            filename: self.filename(),
            portion: self.portion(),
        }
    }
}

impl ResourcePath {
    /// Append `other` under the native platform policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use respath::ResourcePath;
    ///
    /// let base = ResourcePath::new("/Program Files/My Game/../Other Game/");
    /// let exe = base.join("Game.exe");
    /// assert_eq!(exe.to_string(), "file:///Program Files/Other Game/Game.exe");
    ///
    /// // A filename on the left becomes a directory.
    /// let archive = ResourcePath::new("zip://media.zip");
    /// assert_eq!(archive.join("ui/button.png").directories(), ["media.zip", "ui"]);
    /// ```
    #[must_use]
    pub fn join<O>(&self, other: &O) -> Self
    where
        O: JoinOperand + ?Sized,
    {
        self.join_with(other, &PlatformPolicy::native())
    }

    /// Append `other`, tokenizing string operands under `policy`.
    #[must_use]
    pub fn join_with<O>(&self, other: &O, policy: &PlatformPolicy) -> Self
    where
        O: JoinOperand + ?Sized,
    {
        let tail = other.to_fragment(policy);

        let mut directories = self.directories.clone();
        if self.has_filename() {
            directories.push(self.filename.clone());
        }
        let dropped = crate::path::normalize::resolve_onto(
            &mut directories,
            tail.segments.iter().copied(),
        );
        if dropped > 0 {
            log::debug!("join dropped {dropped} '..' segment(s) at the root of {self}");
        }

        Self::from_parts(
            &self.protocol,
            self.drive.as_deref(),
            self.absolute,
            directories,
            tail.filename,
            tail.portion,
        )
    }

    /// Replace this path with `self.join(other)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use respath::ResourcePath;
    ///
    /// let mut path = ResourcePath::new("/Program Files/");
    /// path.append_in_place("My Game/");
    /// path.append_in_place("Game.exe");
    /// assert_eq!(path.to_string(), "file:///Program Files/My Game/Game.exe");
    /// ```
    pub fn append_in_place<O>(&mut self, other: &O)
    where
        O: JoinOperand + ?Sized,
    {
        *self = self.join(other);
    }

    /// Replace this path with `self.join_with(other, policy)`.
    pub fn append_in_place_with<O>(&mut self, other: &O, policy: &PlatformPolicy)
    where
        O: JoinOperand + ?Sized,
    {
        *self = self.join_with(other, policy);
    }
}

impl<O> Div<&O> for &ResourcePath
where
    O: JoinOperand + ?Sized,
{
    type Output = ResourcePath;

    fn div(self, rhs: &O) -> ResourcePath {
        self.join(rhs)
    }
}

impl<O> Div<&O> for ResourcePath
where
    O: JoinOperand + ?Sized,
{
    type Output = ResourcePath;

    fn div(self, rhs: &O) -> ResourcePath {
        self.join(rhs)
    }
}

impl<O> DivAssign<&O> for ResourcePath
where
    O: JoinOperand + ?Sized,
{
    fn div_assign(&mut self, rhs: &O) {
        self.append_in_place(rhs);
    }
}
