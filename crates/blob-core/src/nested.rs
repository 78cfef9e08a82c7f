//! The node interface the containment forest is built against.

/// A closed outline that owns a list of nested outlines.
///
/// `encloses` must be strict: for any pair at most one of `a.encloses(b)`
/// and `b.encloses(a)` holds, and neither holds when `a` and `b` are the
/// same shape.
pub trait Nested: Sized {
    /// Check if `other` lies strictly inside this outline.
    fn encloses(&self, other: &Self) -> bool;

    /// Outlines directly nested inside this one.
    fn children(&self) -> &[Self];

    /// Mutable access to the owned child list.
    fn children_mut(&mut self) -> &mut Vec<Self>;
}

/// Count every node of a forest, at every depth.
pub fn node_count<T: Nested>(roots: &[T]) -> usize {
    let mut count = 0;
    let mut pending: Vec<&[T]> = vec![roots];
    while let Some(level) = pending.pop() {
        count += level.len();
        pending.extend(level.iter().map(|node| node.children()));
    }
    count
}

/// Deep-copy a forest with an explicit work list.
///
/// `shallow` copies one node without its children.
pub fn clone_forest<T, F>(roots: &[T], shallow: F) -> Vec<T>
where
    T: Nested,
    F: Fn(&T) -> T,
{
    // Preorder arena of copies, each with its parent's arena index.
    let mut arena: Vec<(T, Option<usize>)> = Vec::new();
    let mut pending: Vec<(&T, Option<usize>)> =
        roots.iter().rev().map(|node| (node, None)).collect();
    while let Some((node, parent)) = pending.pop() {
        let index = arena.len();
        arena.push((shallow(node), parent));
        pending.extend(node.children().iter().rev().map(|child| (child, Some(index))));
    }

    let mut copies = Vec::with_capacity(roots.len());
    while let Some((mut node, parent)) = arena.pop() {
        node.children_mut().reverse();
        match parent {
            Some(parent) => arena[parent].0.children_mut().push(node),
            None => copies.push(node),
        }
    }
    copies.reverse();
    copies
}

/// Compare two forests shape for shape, `node_eq` deciding for single nodes.
pub fn forest_eq<T, F>(left: &[T], right: &[T], node_eq: F) -> bool
where
    T: Nested,
    F: Fn(&T, &T) -> bool,
{
    let mut pending: Vec<(&[T], &[T])> = vec![(left, right)];
    while let Some((left, right)) = pending.pop() {
        if left.len() != right.len() {
            return false;
        }
        for (a, b) in left.iter().zip(right) {
            if !node_eq(a, b) {
                return false;
            }
            pending.push((a.children(), b.children()));
        }
    }
    true
}

/// Release a child list one node at a time.
///
/// Called from `Drop` so that freeing a deep forest does not nest one call
/// per level.
pub fn drop_forest<T: Nested>(roots: &mut Vec<T>) {
    let mut pending = std::mem::take(roots);
    while let Some(mut node) = pending.pop() {
        pending.append(node.children_mut());
    }
}
