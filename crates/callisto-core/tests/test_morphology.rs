mod common;

use ndarray::Zip;

use callisto_core::error::CallistoError;
use callisto_core::grid::{complement, Grid};
use callisto_core::morphology::{morphology, reduce, MorphConfig, MorphOp, ReduceMode};

use common::{
    clear_margin, grid_from_rows, grid_with_block, naive_reduce, random_binary_grid,
    random_gray_grid,
};

// ---------------------------------------------------------------------------
// Structuring-element validation
// ---------------------------------------------------------------------------

#[test]
fn test_reduce_rejects_even_window() {
    let grid = Grid::zeros((5, 5));
    let err = reduce(&grid, 4, ReduceMode::Max).unwrap_err();
    assert!(matches!(
        err,
        CallistoError::InvalidKernelSize {
            name: "window_size",
            size: 4,
            ..
        }
    ));
}

#[test]
fn test_reduce_rejects_zero_window() {
    let grid = Grid::zeros((5, 5));
    assert!(matches!(
        reduce(&grid, 0, ReduceMode::Min),
        Err(CallistoError::InvalidKernelSize { size: 0, .. })
    ));
}

#[test]
fn test_morphology_validates_unused_size() {
    // Dilation never uses the erosion size, but both are validated up front.
    let grid = Grid::zeros((5, 5));
    let err = morphology(&grid, MorphOp::Dilation, 3, 4).unwrap_err();
    assert!(matches!(
        err,
        CallistoError::InvalidKernelSize {
            name: "erosion_size",
            size: 4,
            ..
        }
    ));
}

#[test]
fn test_window_of_one_is_identity() {
    let grid = random_gray_grid(9, 7, 1);
    assert_eq!(reduce(&grid, 1, ReduceMode::Max).unwrap(), grid);
    assert_eq!(reduce(&grid, 1, ReduceMode::Min).unwrap(), grid);
}

// ---------------------------------------------------------------------------
// Reducer behavior
// ---------------------------------------------------------------------------

#[test]
fn test_dilation_grows_single_pixel_to_square() {
    let mut grid = Grid::zeros((7, 7));
    grid[[3, 3]] = 255;

    let dilated = morphology(&grid, MorphOp::Dilation, 3, 3).unwrap();
    let expected = grid_with_block(7, 7, 2, 2, 3, 3);
    assert_eq!(dilated, expected);
}

#[test]
fn test_dilation_does_not_wrap_around() {
    let mut grid = Grid::zeros((5, 5));
    grid[[0, 0]] = 255;

    let dilated = morphology(&grid, MorphOp::Dilation, 3, 3).unwrap();
    assert_eq!(dilated, grid_with_block(5, 5, 0, 0, 2, 2));
    assert_eq!(dilated[[4, 4]], 0);
    assert_eq!(dilated[[0, 4]], 0);
}

#[test]
fn test_erosion_zero_padding_clears_frame_border() {
    let grid = Grid::from_elem((5, 5), 255);
    let eroded = morphology(&grid, MorphOp::Erosion, 3, 3).unwrap();
    assert_eq!(eroded, grid_with_block(5, 5, 1, 1, 3, 3));
}

#[test]
fn test_erosion_with_large_window_empties_small_grid() {
    let grid = Grid::from_elem((4, 4), 255);
    let eroded = morphology(&grid, MorphOp::Erosion, 3, 5).unwrap();
    assert!(eroded.iter().all(|&v| v == 0));
}

#[test]
fn test_grayscale_dilation_takes_window_max() {
    let grid = grid_from_rows(&[&[10, 20, 30], &[40, 50, 60], &[70, 80, 90]]);
    let dilated = morphology(&grid, MorphOp::Dilation, 3, 3).unwrap();
    let expected = grid_from_rows(&[&[50, 60, 60], &[80, 90, 90], &[80, 90, 90]]);
    assert_eq!(dilated, expected);
}

#[test]
fn test_separable_reduction_matches_direct_window() {
    let grid = random_gray_grid(17, 13, 42);
    for size in [3, 5, 7] {
        assert_eq!(
            reduce(&grid, size, ReduceMode::Max).unwrap(),
            naive_reduce(&grid, size, true),
            "max, size {size}"
        );
        assert_eq!(
            reduce(&grid, size, ReduceMode::Min).unwrap(),
            naive_reduce(&grid, size, false),
            "min, size {size}"
        );
    }
}

#[test]
fn test_parallel_path_matches_direct_window() {
    // 300x300 is above the row-parallelism threshold.
    let grid = random_binary_grid(300, 300, 0.5, 9);
    assert_eq!(
        reduce(&grid, 5, ReduceMode::Max).unwrap(),
        naive_reduce(&grid, 5, true)
    );
    assert_eq!(
        reduce(&grid, 3, ReduceMode::Min).unwrap(),
        naive_reduce(&grid, 3, false)
    );
}

#[test]
fn test_parallel_path_on_rectangular_grid() {
    // Rows and columns differ in length, so a swapped lane axis would show.
    let grid = random_gray_grid(230, 310, 17);
    assert_eq!(
        reduce(&grid, 7, ReduceMode::Max).unwrap(),
        naive_reduce(&grid, 7, true)
    );
    assert_eq!(
        reduce(&grid, 5, ReduceMode::Min).unwrap(),
        naive_reduce(&grid, 5, false)
    );
}

#[test]
fn test_empty_grid_passes_through() {
    let grid = Grid::zeros((0, 0));
    let out = morphology(&grid, MorphOp::Closing, 3, 3).unwrap();
    assert_eq!(out.dim(), (0, 0));
}

// ---------------------------------------------------------------------------
// Composite operations
// ---------------------------------------------------------------------------

#[test]
fn test_opening_removes_speck_and_keeps_block() {
    let mut grid = grid_with_block(12, 12, 2, 2, 5, 5);
    grid[[10, 10]] = 255;

    let opened = morphology(&grid, MorphOp::Opening, 3, 3).unwrap();
    assert_eq!(opened, grid_with_block(12, 12, 2, 2, 5, 5));
}

#[test]
fn test_closing_fills_hole() {
    let mut grid = grid_with_block(9, 9, 1, 1, 7, 7);
    grid[[4, 4]] = 0;

    let closed = morphology(&grid, MorphOp::Closing, 3, 3).unwrap();
    assert_eq!(closed[[4, 4]], 255);
    assert_eq!(closed, grid_with_block(9, 9, 1, 1, 7, 7));
}

#[test]
fn test_opening_uses_each_size_for_its_step() {
    // Erode 3 keeps the 3x3 core of a 5x5 block; dilate 7 grows it to 7x7.
    let grid = grid_with_block(15, 15, 5, 5, 5, 5);
    let opened = morphology(&grid, MorphOp::Opening, 7, 3).unwrap();
    assert_eq!(opened, grid_with_block(15, 15, 3, 3, 9, 9));
}

#[test]
fn test_config_apply_matches_function() {
    let grid = random_binary_grid(20, 20, 0.4, 5);
    let config = MorphConfig::new(MorphOp::Closing, 5, 3);
    assert_eq!(
        config.apply(&grid).unwrap(),
        morphology(&grid, MorphOp::Closing, 5, 3).unwrap()
    );
}

// ---------------------------------------------------------------------------
// Algebraic properties
// ---------------------------------------------------------------------------

#[test]
fn test_erosion_le_identity_le_dilation() {
    for seed in 0..4 {
        let grid = random_gray_grid(20, 20, seed);
        for size in [3, 5, 7] {
            let eroded = morphology(&grid, MorphOp::Erosion, 3, size).unwrap();
            let dilated = morphology(&grid, MorphOp::Dilation, size, 3).unwrap();
            Zip::from(&eroded)
                .and(&grid)
                .and(&dilated)
                .for_each(|&e, &g, &d| {
                    assert!(e <= g && g <= d, "size {size}: {e} <= {g} <= {d} violated");
                });
        }
    }
}

#[test]
fn test_opening_is_idempotent_on_binary_input() {
    for seed in 0..4 {
        let grid = random_binary_grid(24, 24, 0.6, seed);
        for size in [3, 5] {
            let once = morphology(&grid, MorphOp::Opening, size, size).unwrap();
            let twice = morphology(&once, MorphOp::Opening, size, size).unwrap();
            assert_eq!(once, twice, "seed {seed}, size {size}");
        }
    }
}

#[test]
fn test_erosion_dilation_duality() {
    for seed in 0..4 {
        for size in [3, 5] {
            // Keep the padding out of the comparison: no foreground within
            // the window radius of the frame.
            let mut grid = random_binary_grid(16, 16, 0.5, seed);
            clear_margin(&mut grid, size / 2);

            let eroded = morphology(&grid, MorphOp::Erosion, 3, size).unwrap();
            let dual = complement(&morphology(&complement(&grid), MorphOp::Dilation, size, 3).unwrap());
            assert_eq!(eroded, dual, "seed {seed}, size {size}");
        }
    }
}
