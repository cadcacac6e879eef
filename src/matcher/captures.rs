use hashbrown::HashMap;
use smallvec::SmallVec;

/// One recorded binding: a variable name from the pattern and the token it
/// matched. The name borrows the pattern AST, the token borrows the input
/// sequence, so captures live no longer than the match call that produced
/// them.
#[derive(Debug)]
pub struct Capture<'a, T> {
    pub name: &'a str,
    pub token: &'a T,
}

impl<T> Clone for Capture<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Capture<'_, T> {}

impl<T: PartialEq> PartialEq for Capture<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.token == other.token
    }
}

impl<T: Eq> Eq for Capture<'_, T> {}

/// Ordered capture list, in the order captures were recorded. Names repeat:
/// a variable inside a repetition yields one entry per iteration.
pub type CaptureList<'a, T> = SmallVec<[Capture<'a, T>; 4]>;

/// Groups an ordered capture list by variable name. Within one name, tokens
/// keep their capture order.
pub fn group_by_name<'a, T>(captures: &[Capture<'a, T>]) -> HashMap<&'a str, Vec<&'a T>> {
    let mut map: HashMap<&str, Vec<&T>> = HashMap::with_capacity(captures.len());
    for capture in captures {
        map.entry(capture.name).or_default().push(capture.token);
    }
    map
}
