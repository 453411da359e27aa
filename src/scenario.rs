//! The two walkthroughs behind `list_demo`, written against any `Write`.

use std::io::Write;

use crate::{
    alias::{adjust, Alias},
    error::ScenarioError,
    linked_lists::SinglyLinkedList,
};

/// Appends `values` one by one, prints the list, clears it and destroys it.
pub fn list_lifecycle<W: Write>(values: &[i32], out: &mut W) -> Result<(), ScenarioError> {
    let mut list = SinglyLinkedList::new();
    for v in values {
        list.append(*v)?;
    }
    log::info!("built a list of {} elements", list.len());
    writeln!(out, "list: {list}")?;

    list.clear();
    writeln!(out, "after clear: {list} (length {})", list.len())?;
    list.destroy();
    Ok(())
}

/// Adjusts a value through a live alias, releases the alias and shows the
/// next adjustment being refused. Returns the value's final state.
pub fn released_alias<W: Write>(start: i32, out: &mut W) -> Result<i32, ScenarioError> {
    let mut a = start;
    let mut b = Alias::new(&mut a);
    let c = adjust(&mut b)?;
    writeln!(out, " c: {c}")?;
    writeln!(out, "*b: {}", b.get()?)?;

    b.release();
    match adjust(&mut b) {
        Ok(c) => writeln!(out, " c: {c}")?,
        Err(e) => writeln!(out, "refused: {e}")?,
    }
    drop(b);
    writeln!(out, " a: {a}")?;
    Ok(a)
}

/// Both walkthroughs in order.
pub fn run<W: Write>(values: &[i32], alias_start: i32, out: &mut W) -> Result<(), ScenarioError> {
    list_lifecycle(values, out)?;
    released_alias(alias_start, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<(), ScenarioError>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("scenario failed");
        String::from_utf8(buf).expect("utf8 output")
    }

    #[test]
    fn default_run() {
        let out = output(|w| run(&[10, 20], 200, w));
        assert_eq!(
            out,
            "list: [10, 20]\n\
             after clear: [] (length 0)\n \
             c: 100\n\
             *b: 1\n\
             refused: dereferenced an alias that no longer refers to a value\n \
             a: 1\n"
        );
    }

    #[test]
    fn empty_list_lifecycle() {
        let out = output(|w| list_lifecycle(&[], w));
        assert_eq!(out, "list: []\nafter clear: [] (length 0)\n");
    }

    #[test]
    fn released_alias_leaves_value_untouched() {
        let mut buf = Vec::new();
        assert_eq!(released_alias(7, &mut buf).expect("scenario failed"), 2);
        let out = String::from_utf8(buf).expect("utf8 output");
        assert!(out.starts_with(" c: 101\n*b: 2\nrefused: "));
        assert!(!out.contains(" c: 100"));
    }
}
