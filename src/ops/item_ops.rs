use uuid::Uuid;

use crate::model::item::Item;
use crate::model::project::{ContainerRef, Project};
use crate::parse::split_items;

/// Error type for item operations
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item not found: {0}")]
    NotFound(Uuid),
    #[error("category not found: {0}")]
    CategoryNotFound(Uuid),
    #[error("no items in input")]
    NoItems,
}

/// Parse bulk text and append the resulting items to the project's pool.
/// Returns the ids of the new items, in input order.
pub fn add_items(project: &mut Project, raw_text: &str) -> Result<Vec<Uuid>, ItemError> {
    let names = split_items(raw_text);
    if names.is_empty() {
        return Err(ItemError::NoItems);
    }
    let mut ids = Vec::with_capacity(names.len());
    for name in names {
        let item = Item::new(name);
        ids.push(item.id);
        project.items.push(item);
    }
    project.touch();
    Ok(ids)
}

/// Remove an item from the given container.
pub fn delete_item(
    project: &mut Project,
    item_id: Uuid,
    container: ContainerRef,
) -> Result<(), ItemError> {
    let items = container_mut(project, container)?;
    let idx = items
        .iter()
        .position(|i| i.id == item_id)
        .ok_or(ItemError::NotFound(item_id))?;
    items.remove(idx);
    project.touch();
    Ok(())
}

/// Move an item between containers. The destination is validated before the
/// item leaves the source, so an error never loses or duplicates the item.
/// Moving within a single container re-appends the item at the end.
pub fn move_item(
    project: &mut Project,
    item_id: Uuid,
    from: ContainerRef,
    to: ContainerRef,
) -> Result<(), ItemError> {
    // Validate the destination exists BEFORE removing from the source
    if let ContainerRef::Category(id) = to
        && project.category(id).is_none()
    {
        return Err(ItemError::CategoryNotFound(id));
    }

    let source = container_mut(project, from)?;
    let idx = source
        .iter()
        .position(|i| i.id == item_id)
        .ok_or(ItemError::NotFound(item_id))?;
    let item = source.remove(idx);

    container_mut(project, to)
        .expect("destination validated above")
        .push(item);
    project.touch();
    Ok(())
}

fn container_mut(
    project: &mut Project,
    container: ContainerRef,
) -> Result<&mut Vec<Item>, ItemError> {
    match container {
        ContainerRef::Pool => Ok(&mut project.items),
        ContainerRef::Category(id) => project
            .category_mut(id)
            .map(|c| &mut c.items)
            .ok_or(ItemError::CategoryNotFound(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::category_ops::add_category;

    fn sample_project() -> Project {
        Project::new("Pantry".into(), String::new())
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_add_items_bulk() {
        let mut project = sample_project();
        let ids = add_items(&mut project, "* Apple * Banana *  * Cherry").unwrap();
        assert_eq!(ids.len(), 3);
        assert_eq!(names(&project.items), vec!["Apple", "Banana", "Cherry"]);
        assert_eq!(project.items[1].id, ids[1]);
    }

    #[test]
    fn test_add_items_rejects_empty_input() {
        let mut project = sample_project();
        for raw in ["", "   ", "***"] {
            let result = add_items(&mut project, raw);
            assert!(matches!(result, Err(ItemError::NoItems)), "input {:?}", raw);
        }
        assert_eq!(project.total_item_count(), 0);
    }

    #[test]
    fn test_delete_item_from_pool() {
        let mut project = sample_project();
        let ids = add_items(&mut project, "* A * B").unwrap();
        delete_item(&mut project, ids[0], ContainerRef::Pool).unwrap();
        assert_eq!(names(&project.items), vec!["B"]);
    }

    #[test]
    fn test_delete_item_from_category() {
        let mut project = sample_project();
        let ids = add_items(&mut project, "* A").unwrap();
        let cat = add_category(&mut project, "Todo").unwrap();
        move_item(&mut project, ids[0], ContainerRef::Pool, ContainerRef::Category(cat)).unwrap();

        delete_item(&mut project, ids[0], ContainerRef::Category(cat)).unwrap();
        assert_eq!(project.total_item_count(), 0);
    }

    #[test]
    fn test_delete_item_missing_rejected() {
        let mut project = sample_project();
        add_items(&mut project, "* A").unwrap();
        let result = delete_item(&mut project, Uuid::new_v4(), ContainerRef::Pool);
        assert!(matches!(result, Err(ItemError::NotFound(_))));
        assert_eq!(project.items.len(), 1);
    }

    #[test]
    fn test_move_item_pool_to_category() {
        let mut project = sample_project();
        let ids = add_items(&mut project, "* A * B * C").unwrap();
        let cat = add_category(&mut project, "Todo").unwrap();

        move_item(&mut project, ids[1], ContainerRef::Pool, ContainerRef::Category(cat)).unwrap();
        assert_eq!(names(project.container_items(ContainerRef::Pool).unwrap()), vec!["A", "C"]);
        assert_eq!(
            names(project.container_items(ContainerRef::Category(cat)).unwrap()),
            vec!["B"]
        );
    }

    #[test]
    fn test_move_item_category_to_category() {
        let mut project = sample_project();
        let ids = add_items(&mut project, "* A").unwrap();
        let from = add_category(&mut project, "From").unwrap();
        let to = add_category(&mut project, "To").unwrap();
        move_item(&mut project, ids[0], ContainerRef::Pool, ContainerRef::Category(from)).unwrap();

        move_item(
            &mut project,
            ids[0],
            ContainerRef::Category(from),
            ContainerRef::Category(to),
        )
        .unwrap();
        assert!(project.category(from).unwrap().items.is_empty());
        assert_eq!(names(&project.category(to).unwrap().items), vec!["A"]);
        // Identity and name survive the move
        assert_eq!(project.category(to).unwrap().items[0].id, ids[0]);
    }

    #[test]
    fn test_move_item_missing_in_source_is_rejected_unchanged() {
        let mut project = sample_project();
        let ids = add_items(&mut project, "* A").unwrap();
        let cat = add_category(&mut project, "Todo").unwrap();
        let before_updated = project.updated_at;

        // The item is in the pool, not in the category
        let result = move_item(
            &mut project,
            ids[0],
            ContainerRef::Category(cat),
            ContainerRef::Pool,
        );
        assert!(matches!(result, Err(ItemError::NotFound(_))));
        // Never fabricated at the destination, never duplicated
        assert_eq!(names(&project.items), vec!["A"]);
        assert!(project.category(cat).unwrap().items.is_empty());
        assert_eq!(project.updated_at, before_updated);
    }

    #[test]
    fn test_move_item_unknown_destination_keeps_item_in_source() {
        let mut project = sample_project();
        let ids = add_items(&mut project, "* A").unwrap();

        let result = move_item(
            &mut project,
            ids[0],
            ContainerRef::Pool,
            ContainerRef::Category(Uuid::new_v4()),
        );
        assert!(matches!(result, Err(ItemError::CategoryNotFound(_))));
        assert_eq!(names(&project.items), vec!["A"]);
    }

    #[test]
    fn test_move_item_same_container_bumps_to_end() {
        let mut project = sample_project();
        let ids = add_items(&mut project, "* A * B * C").unwrap();

        move_item(&mut project, ids[0], ContainerRef::Pool, ContainerRef::Pool).unwrap();
        assert_eq!(names(&project.items), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_move_item_bumps_updated_at() {
        let mut project = sample_project();
        let ids = add_items(&mut project, "* A").unwrap();
        let cat = add_category(&mut project, "Todo").unwrap();
        let before = project.updated_at;

        move_item(&mut project, ids[0], ContainerRef::Pool, ContainerRef::Category(cat)).unwrap();
        assert!(project.updated_at >= before);
    }

    #[test]
    fn test_conservation_across_moves() {
        let mut project = sample_project();
        let mut ids = add_items(&mut project, "* A * B * C * D").unwrap();
        let first = add_category(&mut project, "First").unwrap();
        let second = add_category(&mut project, "Second").unwrap();
        ids.sort();

        move_item(&mut project, ids[0], ContainerRef::Pool, ContainerRef::Category(first)).unwrap();
        move_item(&mut project, ids[1], ContainerRef::Pool, ContainerRef::Category(second)).unwrap();
        move_item(
            &mut project,
            ids[0],
            ContainerRef::Category(first),
            ContainerRef::Category(second),
        )
        .unwrap();
        move_item(&mut project, ids[1], ContainerRef::Category(second), ContainerRef::Pool).unwrap();

        // Same multiset of ids, each in exactly one container
        let mut seen: Vec<Uuid> = project.items.iter().map(|i| i.id).collect();
        for c in &project.categories {
            seen.extend(c.items.iter().map(|i| i.id));
        }
        seen.sort();
        assert_eq!(seen, ids);
        assert_eq!(project.total_item_count(), 4);
    }
}
