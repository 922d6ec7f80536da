use rand::prelude::*;
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;
use std::ops::{Add, Sub, Mul};

/// Dense row-major `f64` matrix.
///
/// Shapes follow the linear-classifier convention used throughout this
/// crate: a data matrix is (samples, features) and a weight matrix is
/// (features, classes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let rows = data.len();
        let cols = if rows > 0 { data[0].len() } else { 0 };
        Matrix { rows, cols, data }
    }

    /// Uniform random entries in [-1, 1).
    pub fn random(rows: usize, cols: usize) -> Matrix {
        let mut rng = rand::thread_rng();
        let data = (0..rows)
            .map(|_| (0..cols).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect())
            .collect();
        Matrix::from_data(data)
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    /// Both uniforms are drawn from (0, 1] to avoid log(0).
    fn sample_standard_normal(rng: &mut ThreadRng) -> f64 {
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// Gaussian-initialized matrix with entries sampled from N(0, std_dev²).
    ///
    /// Typical use is a small random weight matrix for a gradient check,
    /// e.g. `Matrix::gaussian(d, c, 1e-4)`.
    pub fn gaussian(rows: usize, cols: usize, std_dev: f64) -> Matrix {
        let mut rng = rand::thread_rng();
        let data = (0..rows)
            .map(|_| {
                (0..cols)
                    .map(|_| Matrix::sample_standard_normal(&mut rng) * std_dev)
                    .collect()
            })
            .collect();
        Matrix::from_data(data)
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[j][i] = self.data[i][j];
            }
        }
        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        let data = self.data.iter()
            .map(|row| row.iter().map(|&x| functor(x)).collect())
            .collect();
        Matrix::from_data(data)
    }

    /// Maximum entry of each row. Empty rows yield `f64::NEG_INFINITY`.
    pub fn row_max(&self) -> Vec<f64> {
        self.data.iter()
            .map(|row| row.iter().cloned().fold(f64::NEG_INFINITY, f64::max))
            .collect()
    }

    /// Sum of each row.
    pub fn row_sum(&self) -> Vec<f64> {
        self.data.iter().map(|row| row.iter().sum()).collect()
    }

    /// Subtracts `v[i]` from every entry of row `i` (column-vector broadcast).
    ///
    /// # Panics
    /// Panics if `v.len() != self.rows`.
    pub fn sub_col_vector(&self, v: &[f64]) -> Matrix {
        assert_eq!(v.len(), self.rows, "broadcast vector length must equal row count");
        let data = self.data.iter().zip(v.iter())
            .map(|(row, s)| row.iter().map(|x| x - s).collect())
            .collect();
        Matrix::from_data(data)
    }

    /// Divides every entry of row `i` by `v[i]` (column-vector broadcast).
    ///
    /// # Panics
    /// Panics if `v.len() != self.rows`.
    pub fn div_col_vector(&self, v: &[f64]) -> Matrix {
        assert_eq!(v.len(), self.rows, "broadcast vector length must equal row count");
        let data = self.data.iter().zip(v.iter())
            .map(|(row, s)| row.iter().map(|x| x / s).collect())
            .collect();
        Matrix::from_data(data)
    }

    /// Sum of squared entries (squared Frobenius norm).
    pub fn sum_squares(&self) -> f64 {
        self.data.iter().flatten().map(|x| x * x).sum()
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let data = self.data.iter().zip(rhs.data.iter())
            .map(|(a, b)| a.iter().zip(b.iter()).map(|(x, y)| x + y).collect())
            .collect();
        Matrix::from_data(data)
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let data = self.data.iter().zip(rhs.data.iter())
            .map(|(a, b)| a.iter().zip(b.iter()).map(|(x, y)| x - y).collect())
            .collect();
        Matrix::from_data(data)
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.data[i][k];
                for j in 0..rhs.cols {
                    res.data[i][j] += a * rhs.data[k][j];
                }
            }
        }

        res
    }
}
