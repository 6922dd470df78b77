use crate::vector::prelude::*;

#[test]
fn push_and_extend() -> anyhow::Result<()> {
    let mut vector = Vector::new();
    for i in 0..5 {
        vector.push(i);
    }
    assert_eq!(vector, [0, 1, 2, 3, 4]);

    vector.extend([5, 6, 7]);
    assert_eq!(vector, [0, 1, 2, 3, 4, 5, 6, 7]);

    Ok(())
}

#[test]
fn insert_shifts_cursors() -> anyhow::Result<()> {
    let mut vector = Vector::from(vec![10, 20, 30]);
    let second = vector.cursor(1);

    vector.insert(0, 99);

    assert_eq!(vector, [99, 10, 20, 30]);
    assert_eq!(second.get(&vector), Some(&20));
    assert_eq!(second.offset_from(&vector.cursor(0)), 2);

    Ok(())
}

#[test]
fn insert_at_returns_cursor() -> anyhow::Result<()> {
    let mut vector = Vector::from(vec![1, 2, 4]);
    let gap = vector.cursor(2);

    let inserted = vector.insert_at(&gap, 3);

    assert_eq!(vector, [1, 2, 3, 4]);
    assert_eq!(inserted.get(&vector), Some(&3));
    // the old occupant of the slot was shifted right, and the cursor
    // that addressed it follows
    assert_eq!(gap.position(), 3);
    assert_eq!(gap.get(&vector), Some(&4));

    Ok(())
}

#[test]
fn insert_many_mid() -> anyhow::Result<()> {
    let mut vector = Vector::from(vec![1, 2, 5]);
    let tail = vector.cursor(2);

    vector.insert_many(2, [3, 4]);

    assert_eq!(vector, [1, 2, 3, 4, 5]);
    assert_eq!(tail.position(), 4);
    assert_eq!(tail.get(&vector), Some(&5));

    vector.insert_many(5, std::iter::empty());
    assert_eq!(vector, [1, 2, 3, 4, 5]);

    Ok(())
}

#[test]
fn insert_fill() -> anyhow::Result<()> {
    let mut vector = Vector::from(vec![1, 5]);
    vector.insert_fill(1, 3, 9);
    assert_eq!(vector, [1, 9, 9, 9, 5]);
    Ok(())
}

#[test]
fn append_moves_elements() -> anyhow::Result<()> {
    let mut target = Vector::from(vec![1, 2]);
    let mut source = Vector::from(vec![3, 4, 5]);
    let target_end = target.cursor_end();
    let source_front = source.cursor(0);

    target.append(&mut source);

    assert_eq!(target, [1, 2, 3, 4, 5]);
    assert!(source.is_empty());
    assert_eq!(target_end, target.cursor_end());
    assert_eq!(source_front.get(&source), None);

    Ok(())
}

#[test]
fn growth_stress_keeps_cursors_pinned() -> anyhow::Result<()> {
    let mut vector: Vector<u32> = Vector::new();
    let mut pinned: Vec<(Cursor<u32>, u32)> = Vec::new();

    for round in 0..2_000u32 {
        let index = if vector.is_empty() {
            0
        } else {
            rand::random::<u32>() as usize % (vector.len() + 1)
        };
        vector.insert(index, round);

        if round % 7 == 0 {
            let watched = rand::random::<u32>() as usize % vector.len();
            pinned.push((vector.cursor(watched), vector[watched]));
        }
    }

    assert_eq!(vector.len(), 2_000);
    for (cursor, value) in &pinned {
        assert_eq!(cursor.get(&vector), Some(value));
    }

    Ok(())
}
