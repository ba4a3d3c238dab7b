//! Validates population invariants and selection behavior across generations

use ndarray::Array3;
use tilevolve::algorithm::executor::{EvolutionConfig, SelectionBands, TileEvolution};
use tilevolve::algorithm::genome::Genome;
use tilevolve::spatial::grid::TileGrid;
use tilevolve::spatial::render::render;
use tilevolve::spatial::tiles::{Tile, TileLibrary};

fn black_white_library(tile_size: usize) -> TileLibrary {
    let black = Tile::zeros((tile_size, tile_size, 3));
    let white = Tile::from_elem((tile_size, tile_size, 3), 255);
    TileLibrary::new(vec![black, white]).unwrap_or_else(|_| unreachable!())
}

fn checkerboard_target(cells: usize, tile_size: usize) -> Array3<u8> {
    let library = black_white_library(tile_size);
    let grid =
        TileGrid::new(cells, cells, tile_size, tile_size).unwrap_or_else(|_| unreachable!());
    let genes = (0..cells * cells)
        .map(|i| (i / cells + i % cells) % 2)
        .collect();
    render(&Genome::from_genes(genes), &library, &grid).unwrap_or_else(|_| unreachable!())
}

fn evolution_on_checkerboard(seed: u64) -> TileEvolution {
    let config = EvolutionConfig {
        population_size: 20,
        generations: 30,
        seed,
    };
    TileEvolution::new(checkerboard_target(4, 8), black_white_library(8), config)
        .unwrap_or_else(|_| unreachable!())
}

#[test]
fn test_best_fitness_never_regresses() {
    let mut evolution = evolution_on_checkerboard(7);

    let mut previous = f64::INFINITY;
    for _ in 0..30 {
        let best = evolution
            .execute_generation()
            .unwrap_or_else(|_| unreachable!());
        assert!(
            best <= previous,
            "best fitness regressed from {previous} to {best}"
        );
        previous = best;
    }
}

#[test]
fn test_population_size_is_constant() {
    let mut evolution = evolution_on_checkerboard(19);
    assert_eq!(evolution.population().len(), 20);

    for _ in 0..10 {
        assert!(evolution.execute_generation().is_ok());
        assert_eq!(evolution.population().len(), 20);
    }
}

#[test]
fn test_genomes_stay_valid_through_evolution() {
    let mut evolution = evolution_on_checkerboard(3);
    for _ in 0..10 {
        assert!(evolution.execute_generation().is_ok());
    }

    let cell_count = evolution.grid().cell_count();
    for member in evolution.population().members() {
        assert_eq!(member.genome().len(), cell_count);
        assert!(member.genome().validate(2).is_ok());
    }
}

#[test]
fn test_same_seed_reproduces_the_run() {
    let mut first = evolution_on_checkerboard(42);
    let mut second = evolution_on_checkerboard(42);

    for _ in 0..10 {
        let a = first.execute_generation().unwrap_or_else(|_| unreachable!());
        let b = second
            .execute_generation()
            .unwrap_or_else(|_| unreachable!());
        assert!((a - b).abs() < f64::EPSILON);
    }
}

#[test]
fn test_twenty_member_selection_arithmetic() {
    let bands = SelectionBands::for_population(20).unwrap_or_else(|_| unreachable!());
    assert_eq!(bands.crossover_band_width(), 4);
    assert_eq!(bands.parent_pool(), 4);
    assert_eq!(bands.candidate_pair_count(), 12);
}

#[test]
fn test_finish_reports_the_overall_best() {
    let mut evolution = evolution_on_checkerboard(11);
    let mut last_best = f64::INFINITY;
    for _ in 0..15 {
        last_best = evolution
            .execute_generation()
            .unwrap_or_else(|_| unreachable!());
    }

    let best = evolution.finish().unwrap_or_else(|_| unreachable!());
    assert!((best.fitness() - last_best).abs() < f64::EPSILON);
    assert!(
        evolution
            .population()
            .members()
            .iter()
            .all(|member| member.fitness() >= best.fitness())
    );
}

#[test]
fn test_undersized_population_is_rejected() {
    let config = EvolutionConfig {
        population_size: 5,
        generations: 1,
        seed: 0,
    };
    let result = TileEvolution::new(checkerboard_target(4, 8), black_white_library(8), config);
    assert!(result.is_err());
}

#[test]
fn test_target_must_tile_evenly() {
    let config = EvolutionConfig {
        population_size: 20,
        generations: 1,
        seed: 0,
    };
    let target = Array3::<u8>::zeros((30, 32, 3));
    let result = TileEvolution::new(target, black_white_library(8), config);
    assert!(result.is_err());
}
