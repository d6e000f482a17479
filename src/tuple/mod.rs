//! A two element tuple with named accessors and chainable setters.


/// A pair of values that can be updated in place.
///
/// Plain `(A, B)` tuples work for most things. This type exists for call sites that read better
/// with `pair.set_a(x).set_b(y)` chains.
///
/// # Examples
/// ```
/// # use anenome::tuple::Pair;
/// let mut pair = Pair::new("count", 0);
/// pair.set_b(3).set_a("total");
/// assert_eq!(pair.into_inner(), ("total", 3));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair<A, B> {
    a: A,
    b: B,
}

impl<A, B> Pair<A, B> {
    pub const fn new(a: A, b: B) -> Pair<A, B> {
        Pair { a, b }
    }

    pub const fn a(&self) -> &A {
        &self.a
    }

    pub const fn a_mut(&mut self) -> &mut A {
        &mut self.a
    }

    pub fn set_a(&mut self, a: A) -> &mut Self {
        self.a = a;
        self
    }

    pub const fn b(&self) -> &B {
        &self.b
    }

    pub const fn b_mut(&mut self) -> &mut B {
        &mut self.b
    }

    pub fn set_b(&mut self, b: B) -> &mut Self {
        self.b = b;
        self
    }

    pub fn into_inner(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((a, b): (A, B)) -> Self {
        Pair { a, b }
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(value: Pair<A, B>) -> Self {
        value.into_inner()
    }
}
