use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::{vector::view::XYZW, Quaternion};

impl Deref for Quaternion {
    type Target = XYZW;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl DerefMut for Quaternion {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}
