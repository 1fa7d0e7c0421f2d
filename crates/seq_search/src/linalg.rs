//! Exact coefficient solving over `BigRational`.
//!
//! For `s` unknowns only `s` rows of the prefix are used: the earliest rows
//! that are linearly independent in the coefficient columns. Later rows
//! are never touched here; callers verify the solution against them.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

/// Outcome of solving the square subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubsystemSolution {
    /// Coefficients in column order
    Unique(Vec<BigRational>),
    /// Fewer than `s` independent rows in the whole prefix
    Singular,
    /// A row reduced to `0 = c` with `c ≠ 0` before the basis was complete
    Inconsistent,
}

/// One reduced row: unit pivot at `pivot`, zero in every other basis pivot
/// column. The last entry is the right-hand side.
struct BasisRow {
    pivot: usize,
    cells: Vec<BigRational>,
}

fn row_at(columns: &[&[BigInt]], target: &[BigInt], n: usize) -> Vec<BigRational> {
    columns
        .iter()
        .map(|column| BigRational::from_integer(column[n].clone()))
        .chain(std::iter::once(BigRational::from_integer(target[n].clone())))
        .collect()
}

/// `row -= factor * other`, over all cells.
fn subtract_scaled(row: &mut [BigRational], factor: &BigRational, other: &[BigRational]) {
    for (cell, o) in row.iter_mut().zip(other) {
        if !o.is_zero() {
            *cell -= factor * o;
        }
    }
}

/// Solve `target[n] = Σ c_j * columns[j][n]` on the first independent rows.
///
/// Rows are reduced one at a time against the rows kept so far
/// (Gauss-Jordan), so a row is only read when the earlier ones did not
/// already determine every unknown.
pub fn solve_square_subsystem(columns: &[&[BigInt]], target: &[BigInt]) -> SubsystemSolution {
    let unknowns = columns.len();
    let mut basis: Vec<BasisRow> = Vec::with_capacity(unknowns);

    for n in 0..target.len() {
        if basis.len() == unknowns {
            break;
        }

        let mut row = row_at(columns, target, n);
        for kept in &basis {
            let factor = row[kept.pivot].clone();
            if !factor.is_zero() {
                subtract_scaled(&mut row, &factor, &kept.cells);
            }
        }

        let Some(pivot) = (0..unknowns).find(|&j| !row[j].is_zero()) else {
            if row[unknowns].is_zero() {
                continue;
            }
            return SubsystemSolution::Inconsistent;
        };

        let scale = row[pivot].clone();
        for cell in row.iter_mut() {
            *cell /= &scale;
        }
        for kept in basis.iter_mut() {
            let factor = kept.cells[pivot].clone();
            if !factor.is_zero() {
                subtract_scaled(&mut kept.cells, &factor, &row);
            }
        }
        basis.push(BasisRow { pivot, cells: row });
    }

    if basis.len() < unknowns {
        return SubsystemSolution::Singular;
    }

    let mut solution = vec![BigRational::zero(); unknowns];
    for kept in basis {
        solution[kept.pivot] = kept.cells[unknowns].clone();
    }
    SubsystemSolution::Unique(solution)
}
