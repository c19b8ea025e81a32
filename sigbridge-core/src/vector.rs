use crate::Smpl;

/// A fixed-length run of samples borrowed from caller-owned storage.
///
/// `length` is always the length of the borrowed slice. The view holds no
/// ownership and no reference count; `'a` ties it to the storage it aliases.
#[derive(Debug, PartialEq)]
pub struct Vector<'a> {
    data: &'a mut [Smpl],
}

impl<'a> Vector<'a> {
    /// Alias `data` without copying.
    pub fn new(data: &'a mut [Smpl]) -> Self {
        Self { data }
    }

    /// Number of samples.
    #[inline]
    pub fn length(&self) -> usize {
        self.data.len()
    }

    /// Borrow the samples.
    #[inline]
    pub fn as_slice(&self) -> &[Smpl] {
        &*self.data
    }

    /// Mutably borrow the samples.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Smpl] {
        &mut *self.data
    }

    /// Address of the first sample.
    #[inline]
    pub fn as_ptr(&self) -> *const Smpl {
        self.data.as_ptr()
    }

    /// Give back the aliased storage for the full lifetime `'a`.
    pub fn into_slice(self) -> &'a mut [Smpl] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_without_copy() {
        let mut storage: Vec<Smpl> = vec![0.5, 1.5, 2.5];
        let base = storage.as_ptr();
        let mut vec = Vector::new(&mut storage);
        assert_eq!(vec.length(), 3);
        assert_eq!(vec.as_ptr(), base);

        vec.as_mut_slice()[0] = 9.0;
        let back = vec.into_slice();
        assert_eq!(back.as_ptr(), base);
        assert_eq!(storage[0], 9.0);
    }
}
