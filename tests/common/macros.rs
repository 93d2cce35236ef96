/// Asserts that every cell of a grid holds a breed below `$num_breeds`.
#[macro_export]
macro_rules! assert_breeds_in_range {
    ($grid:expr, $num_breeds:expr) => {
        for (idx, &breed) in $grid.cells().iter().enumerate() {
            assert!(
                (breed as usize) < ($num_breeds as usize),
                "Cell {} holds breed {} outside [0, {})",
                idx,
                breed,
                $num_breeds
            );
        }
    };
}

/// Asserts that a grid matches the given rows exactly.
#[macro_export]
macro_rules! assert_terrain {
    ($grid:expr, [$([$($breed:expr),* $(,)?]),* $(,)?]) => {
        let expected: Vec<Vec<u8>> = vec![$(vec![$($breed),*]),*];
        let actual: Vec<Vec<u8>> = $grid.rows().map(|row| row.to_vec()).collect();
        assert_eq!(actual, expected, "Terrain mismatch");
    };
}
