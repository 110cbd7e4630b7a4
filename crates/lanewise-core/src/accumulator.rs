//! Operation chaining over one batch
//!
//! An [`Accumulator`] threads a batch through a sequence of kernels without
//! writing intermediates back to caller storage. It owns two [`Slicable`]
//! buffers: each step reads the front buffer, writes the back buffer, then
//! swaps them, so a step never reads and writes the same memory.
//!
//! Steps are described by [`Op`] (vector in, vector out) and [`ReduceOp`]
//! (vector in, one scalar batch out). Only `Op` can continue a chain, so
//! feeding a dot product into another step is a type error.
//!
//! ```
//! use lanewise_core::accumulator::{Accumulator, Op, ReduceOp};
//! use lanewise_core::kernels::Kernels;
//! use lanewise_core::view::Slicable;
//!
//! type K = Kernels<f32, 3, 4>;
//!
//! let pos = Slicable::<f32, 3, 4>::splat(2.0);
//! let offset = Slicable::<f32, 3, 4>::splat(1.0);
//! let mut len_sq = [0.0f32; 4];
//!
//! Accumulator::begin(Op::Binary(K::add, offset.view()), pos.view())
//!     .cont(Op::Unary(K::negate))
//!     .end_reduce(ReduceOp::Unary(K::lengths_sqrd), &mut len_sq);
//!
//! assert_eq!(len_sq, [27.0; 4]);
//! ```

use crate::adapter::{CastElement, Dim};
use crate::element::Element;
use crate::view::{Scalars, ScalarsMut, Slicable, Vectors, VectorsMut};
use std::fmt;

/// `out = f(v)`
pub type UnaryFn<T, const LEN: usize, const N: usize> =
    for<'v, 'o> fn(Vectors<'v, T, LEN, N>, VectorsMut<'o, T, LEN, N>);

/// `out = f(v, w)`
pub type BinaryFn<T, const LEN: usize, const N: usize> =
    for<'v, 'w, 'o> fn(Vectors<'v, T, LEN, N>, Vectors<'w, T, LEN, N>, VectorsMut<'o, T, LEN, N>);

/// `out = f(v, s)`
pub type ScaledFn<T, const LEN: usize, const N: usize> =
    for<'v, 's, 'o> fn(Vectors<'v, T, LEN, N>, Scalars<'s, T, N>, VectorsMut<'o, T, LEN, N>);

/// `out = f(v, w, s)`
pub type BinaryScaledFn<T, const LEN: usize, const N: usize> = for<'v, 'w, 's, 'o> fn(
    Vectors<'v, T, LEN, N>,
    Vectors<'w, T, LEN, N>,
    Scalars<'s, T, N>,
    VectorsMut<'o, T, LEN, N>,
);

/// `out = f(v, a, b)`
pub type TernaryFn<T, const LEN: usize, const N: usize> = for<'v, 'a, 'b, 'o> fn(
    Vectors<'v, T, LEN, N>,
    Vectors<'a, T, LEN, N>,
    Vectors<'b, T, LEN, N>,
    VectorsMut<'o, T, LEN, N>,
);

/// `out = f(v)`, one scalar per lane
pub type ReduceUnaryFn<T, R, const LEN: usize, const N: usize> =
    for<'v, 'o> fn(Vectors<'v, T, LEN, N>, ScalarsMut<'o, R, N>);

/// `out = f(v, w)`, one scalar per lane
pub type ReduceBinaryFn<T, R, const LEN: usize, const N: usize> =
    for<'v, 'w, 'o> fn(Vectors<'v, T, LEN, N>, Vectors<'w, T, LEN, N>, ScalarsMut<'o, R, N>);

/// `out = f(v, w, tolerance)`, one scalar per lane
pub type ReduceToleranceFn<T, R, const LEN: usize, const N: usize> =
    for<'v, 'w, 'o> fn(Vectors<'v, T, LEN, N>, Vectors<'w, T, LEN, N>, T, ScalarsMut<'o, R, N>);

/// Shape of an operation descriptor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    Unary,
    Binary,
    Scaled,
    BinaryScaled,
    Ternary,
    Tolerance,
}

impl OpKind {
    /// Operand count, the chained batch included
    pub fn arity(self) -> usize {
        match self {
            OpKind::Unary => 1,
            OpKind::Binary | OpKind::Scaled | OpKind::Tolerance => 2,
            OpKind::BinaryScaled | OpKind::Ternary => 3,
        }
    }
}

/// A vector-producing step: kernel plus the operands besides the chained batch
#[derive(Clone, Copy)]
pub enum Op<'a, T, const LEN: usize, const N: usize> {
    /// `negate`, `abs`, `normalize`, `invert`, `sin`, `cos`, `copy`
    Unary(UnaryFn<T, LEN, N>),
    /// `add`, `sub`, `mul`, `div`, `modulo`, `min`, `max`, 3-D `cross`
    Binary(BinaryFn<T, LEN, N>, Vectors<'a, T, LEN, N>),
    /// `scale`
    Scaled(ScaledFn<T, LEN, N>, Scalars<'a, T, N>),
    /// `lerp`, `move_towards`
    BinaryScaled(BinaryScaledFn<T, LEN, N>, Vectors<'a, T, LEN, N>, Scalars<'a, T, N>),
    /// `clamp`
    Ternary(TernaryFn<T, LEN, N>, Vectors<'a, T, LEN, N>, Vectors<'a, T, LEN, N>),
}

impl<'a, T, const LEN: usize, const N: usize> Op<'a, T, LEN, N> {
    pub fn kind(&self) -> OpKind {
        match self {
            Op::Unary(..) => OpKind::Unary,
            Op::Binary(..) => OpKind::Binary,
            Op::Scaled(..) => OpKind::Scaled,
            Op::BinaryScaled(..) => OpKind::BinaryScaled,
            Op::Ternary(..) => OpKind::Ternary,
        }
    }

    /// Run the step with `v` as its first operand
    #[inline]
    pub fn apply(self, v: Vectors<'_, T, LEN, N>, out: VectorsMut<'_, T, LEN, N>) {
        match self {
            Op::Unary(f) => f(v, out),
            Op::Binary(f, w) => f(v, w, out),
            Op::Scaled(f, s) => f(v, s, out),
            Op::BinaryScaled(f, w, s) => f(v, w, s, out),
            Op::Ternary(f, a, b) => f(v, a, b, out),
        }
    }
}

impl<'a, T, const LEN: usize, const N: usize> fmt::Debug for Op<'a, T, LEN, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Op").field(&self.kind()).finish()
    }
}

/// A terminal step producing one scalar batch of `R`
#[derive(Clone, Copy)]
pub enum ReduceOp<'a, T, R, const LEN: usize, const N: usize> {
    /// `lengths`, `lengths_sqrd`
    Unary(ReduceUnaryFn<T, R, LEN, N>),
    /// `dots`, `distances`, `distances_sqrd`, `eql`, 2-D `cross`
    Binary(ReduceBinaryFn<T, R, LEN, N>, Vectors<'a, T, LEN, N>),
    /// `approx_eq_abs`, `approx_eq_rel`
    Tolerance(ReduceToleranceFn<T, R, LEN, N>, Vectors<'a, T, LEN, N>, T),
}

impl<'a, T, R, const LEN: usize, const N: usize> ReduceOp<'a, T, R, LEN, N> {
    pub fn kind(&self) -> OpKind {
        match self {
            ReduceOp::Unary(..) => OpKind::Unary,
            ReduceOp::Binary(..) => OpKind::Binary,
            ReduceOp::Tolerance(..) => OpKind::Tolerance,
        }
    }

    #[inline]
    pub fn apply(self, v: Vectors<'_, T, LEN, N>, out: ScalarsMut<'_, R, N>) {
        match self {
            ReduceOp::Unary(f) => f(v, out),
            ReduceOp::Binary(f, w) => f(v, w, out),
            ReduceOp::Tolerance(f, w, tol) => f(v, w, tol, out),
        }
    }
}

impl<'a, T, R, const LEN: usize, const N: usize> fmt::Debug for ReduceOp<'a, T, R, LEN, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReduceOp").field(&self.kind()).finish()
    }
}

/// Double-buffered working set for a chain of batch operations
#[derive(Clone, Debug)]
pub struct Accumulator<T, const LEN: usize, const N: usize> {
    buffers: [Slicable<T, LEN, N>; 2],
    front: usize,
    steps: usize,
}

impl<T: Element, const LEN: usize, const N: usize> Accumulator<T, LEN, N> {
    /// Start a chain by applying `op` to `input`
    pub fn begin(op: Op<'_, T, LEN, N>, input: Vectors<'_, T, LEN, N>) -> Self {
        log::trace!("accumulator<{}x{}> begin: {:?}", LEN, N, op.kind());
        let mut acc = Self::new(Slicable::zeroed());
        op.apply(input, acc.buffers[0].view_mut());
        acc.steps = 1;
        acc
    }

    /// Start a chain from an existing batch
    pub fn new(batch: Slicable<T, LEN, N>) -> Self {
        Self {
            buffers: [batch, Slicable::zeroed()],
            front: 0,
            steps: 0,
        }
    }

    /// Apply `op` to the current batch
    #[must_use]
    pub fn cont(mut self, op: Op<'_, T, LEN, N>) -> Self {
        self.steps += 1;
        log::trace!("accumulator<{}x{}> step {}: {:?}", LEN, N, self.steps, op.kind());

        let [first, second] = &mut self.buffers;
        let (src, dst) = if self.front == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };
        op.apply(src.view(), dst.view_mut());
        self.front ^= 1;
        self
    }

    /// Apply `op` to the current batch and write the result to `out`
    pub fn end(self, op: Op<'_, T, LEN, N>, out: VectorsMut<'_, T, LEN, N>) {
        log::trace!("accumulator<{}x{}> end after {} steps: {:?}", LEN, N, self.steps, op.kind());
        op.apply(self.view(), out);
    }

    /// Reduce the current batch to one scalar per lane
    pub fn end_reduce<R>(self, op: ReduceOp<'_, T, R, LEN, N>, out: ScalarsMut<'_, R, N>) {
        log::trace!(
            "accumulator<{}x{}> reduce after {} steps: {:?}",
            LEN,
            N,
            self.steps,
            op.kind()
        );
        op.apply(self.view(), out);
    }

    /// New chain over the current batch converted to `U`
    pub fn cast<U: Element>(&self) -> Accumulator<U, LEN, N>
    where
        T: CastElement<U>,
    {
        log::trace!("accumulator<{}x{}> cast {} -> {}", LEN, N, T::KIND.name(), U::KIND.name());
        Accumulator::new(self.current().cast())
    }

    /// New chain over the selected dimensions of the current batch
    ///
    /// # Panics
    /// If a selector is not below `LEN`.
    #[track_caller]
    pub fn swizzle<const OUT: usize>(&self, selectors: [Dim; OUT]) -> Accumulator<T, OUT, N> {
        log::trace!("accumulator<{}x{}> swizzle to {} dimensions", LEN, N, OUT);
        Accumulator::new(self.current().swizzle(selectors))
    }

    /// Batch produced by the last step
    #[inline]
    pub fn current(&self) -> &Slicable<T, LEN, N> {
        &self.buffers[self.front]
    }

    #[inline]
    pub fn view(&self) -> Vectors<'_, T, LEN, N> {
        self.current().view()
    }

    /// Steps applied so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn into_inner(self) -> Slicable<T, LEN, N> {
        let [first, second] = self.buffers;
        if self.front == 0 {
            first
        } else {
            second
        }
    }
}

impl<T: Element, const LEN: usize, const N: usize> From<Slicable<T, LEN, N>>
    for Accumulator<T, LEN, N>
{
    fn from(batch: Slicable<T, LEN, N>) -> Self {
        Self::new(batch)
    }
}
