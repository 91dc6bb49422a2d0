mod content;
mod node;

pub use content::Content;
pub use node::{Element, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id_str() == Some(id) {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_element(child, id))
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id_str() == Some(id) {
        return Some(root);
    }

    root.child_elements_mut()
        .iter_mut()
        .find_map(|child| find_element_mut(child, id))
}

/// Path from the root down to the element with `id`, root first.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    if root.id_str() == Some(id) {
        return Some(vec![root]);
    }

    for child in root.child_elements() {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root);
            return Some(path);
        }
    }

    None
}

/// Nearest element (the target itself included) on the path to `id` that
/// carries `class`.
pub fn closest_with_class<'a>(root: &'a Element, id: &str, class: &str) -> Option<&'a Element> {
    path_to(root, id)?
        .into_iter()
        .rev()
        .find(|el| el.has_class(class))
}

/// All elements carrying `class`, in document order.
pub fn collect_by_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_into(root, &mut |el| el.has_class(class), &mut found);
    found
}

fn collect_into<'a>(
    el: &'a Element,
    pred: &mut impl FnMut(&Element) -> bool,
    out: &mut Vec<&'a Element>,
) {
    if pred(el) {
        out.push(el);
    }
    for child in el.child_elements() {
        collect_into(child, pred, out);
    }
}

/// First element in document order matching `pred`.
pub fn find_first<'a>(root: &'a Element, pred: &impl Fn(&Element) -> bool) -> Option<&'a Element> {
    if pred(root) {
        return Some(root);
    }
    root.child_elements()
        .iter()
        .find_map(|child| find_first(child, pred))
}

/// Visit every element of the tree mutably, parents before children.
pub fn for_each_mut(root: &mut Element, f: &mut impl FnMut(&mut Element)) {
    f(root);
    for child in root.child_elements_mut() {
        for_each_mut(child, f);
    }
}
