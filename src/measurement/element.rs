//! 計測対象となる数値型の抽象化
//!
//! i8 / i32 / i64 / f32 / f64 の閉じた集合に対してのみ実装する。
//! 整数はオーバーフローでパニックしないようラップ演算を使い、
//! 0除算は0を返す。値のずれは計測上許容する。

use crate::core::NumericKind;

mod private {
    pub trait Sealed {}
}

/// 計測ループで使う要素型
pub trait BenchElement: Copy + private::Sealed {
    const KIND: NumericKind;

    /// 3変数の初期値
    fn seed() -> Self;

    fn bench_add(self, rhs: Self) -> Self;

    fn bench_sub(self, rhs: Self) -> Self;

    fn bench_mul(self, rhs: Self) -> Self;

    fn bench_div(self, rhs: Self) -> Self;
}

macro_rules! impl_integer_element {
    ($ty:ty, $kind:expr) => {
        impl private::Sealed for $ty {}

        impl BenchElement for $ty {
            const KIND: NumericKind = $kind;

            #[inline(always)]
            fn seed() -> Self {
                1
            }

            #[inline(always)]
            fn bench_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn bench_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline(always)]
            fn bench_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline(always)]
            fn bench_div(self, rhs: Self) -> Self {
                if rhs == 0 {
                    0
                } else {
                    self.wrapping_div(rhs)
                }
            }
        }
    };
}

macro_rules! impl_float_element {
    ($ty:ty, $kind:expr) => {
        impl private::Sealed for $ty {}

        impl BenchElement for $ty {
            const KIND: NumericKind = $kind;

            #[inline(always)]
            fn seed() -> Self {
                1.0
            }

            #[inline(always)]
            fn bench_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn bench_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn bench_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline(always)]
            fn bench_div(self, rhs: Self) -> Self {
                self / rhs
            }
        }
    };
}

impl_integer_element!(i8, NumericKind::I8);
impl_integer_element!(i32, NumericKind::I32);
impl_integer_element!(i64, NumericKind::I64);
impl_float_element!(f32, NumericKind::F32);
impl_float_element!(f64, NumericKind::F64);
