use super::dense_matrix::Matrix;
use super::EPS;

impl Matrix {
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for c in 0..self.number_of_columns {
            let (a, b) = (self.offset(i, c), self.offset(j, c));
            self.entries_mut().swap(a, b);
        }
    }

    pub fn scale_row(&mut self, k: f64, row: usize) {
        for c in 0..self.number_of_columns {
            self[(row, c)] *= k;
        }
    }

    // dest += k * src
    pub fn add_row(&mut self, k: f64, src: usize, dest: usize) {
        for c in 0..self.number_of_columns {
            let v = self[(src, c)];
            self[(dest, c)] += k * v;
        }
    }

    /// Snaps every entry smaller than [`EPS`] in magnitude to exactly zero.
    pub fn clean(&mut self) {
        for v in self.entries_mut().iter_mut() {
            if v.abs() < EPS {
                *v = 0.0;
            }
        }
    }

    /// Whether any pair of corresponding entries differs by more than [`EPS`].
    /// Both matrices must have the same shape.
    pub fn changed(&self, other: &Matrix) -> bool {
        debug_assert_eq!(self.number_of_rows, other.number_of_rows);
        debug_assert_eq!(self.number_of_columns, other.number_of_columns);
        self.entries()
            .iter()
            .zip(other.entries())
            .any(|(a, b)| (a - b).abs() > EPS)
    }
}
