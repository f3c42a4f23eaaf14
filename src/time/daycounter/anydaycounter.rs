use std::any::{
    Any,
    TypeId
};
use std::fmt;

use chrono::NaiveDate;

/// The one capability a day-count convention needs: the accrual fraction
/// between two dates.
///
/// Any `Fn(NaiveDate, NaiveDate) -> f64` qualifies, so closures can be used
/// as ad-hoc conventions.
pub trait DayCountFraction {
    fn dcf(&self, from: NaiveDate, to: NaiveDate) -> f64;
}

impl<F> DayCountFraction for F
where
    F: Fn(NaiveDate, NaiveDate) -> f64,
{
    #[inline]
    fn dcf(&self, from: NaiveDate, to: NaiveDate) -> f64 {
        self(from, to)
    }
}

trait ErasedDayCounter: Send + Sync {
    fn dcf(&self, from: NaiveDate, to: NaiveDate) -> f64;

    fn clone_box(&self) -> Box<dyn ErasedDayCounter>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn type_name(&self) -> &'static str;
}

struct DayCounterHolder<T> {
    convention: T
}

impl<T> ErasedDayCounter for DayCounterHolder<T>
where
    T: DayCountFraction + Clone + Send + Sync + 'static,
{
    #[inline]
    fn dcf(&self, from: NaiveDate, to: NaiveDate) -> f64 {
        self.convention.dcf(from, to)
    }

    fn clone_box(&self) -> Box<dyn ErasedDayCounter> {
        Box::new(DayCounterHolder { convention: self.convention.clone() })
    }

    fn as_any(&self) -> &dyn Any {
        &self.convention
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        &mut self.convention
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        Box::new(self.convention)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Owns exactly one day-count convention of any type and exposes it through
/// [`DayCountFraction`].
///
/// Conventions need not share a base type; anything implementing
/// [`DayCountFraction`] + `Clone` can be stored, so unrelated conventions fit
/// in one collection. Cloning the handle clones the held convention, and the
/// original type can be recovered with [`AnyDayCounter::downcast_ref`], which
/// checks the runtime type before handing out a reference.
pub struct AnyDayCounter {
    inner: Box<dyn ErasedDayCounter>
}

impl AnyDayCounter {
    pub fn new<T>(convention: T) -> AnyDayCounter
    where
        T: DayCountFraction + Clone + Send + Sync + 'static,
    {
        AnyDayCounter { inner: Box::new(DayCounterHolder { convention }) }
    }

    #[inline]
    pub fn dcf(&self, from: NaiveDate, to: NaiveDate) -> f64 {
        self.inner.dcf(from, to)
    }

    /// `TypeId` of the held convention, not of the handle.
    pub fn held_type_id(&self) -> TypeId {
        self.inner.as_any().type_id()
    }

    pub fn held_type_name(&self) -> &'static str {
        self.inner.type_name()
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.inner.as_any().is::<T>()
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.inner.as_any_mut().downcast_mut::<T>()
    }

    /// Takes the convention back out, consuming the handle; `None` when the
    /// held type is not `T`. Check with [`AnyDayCounter::is`] first to keep
    /// the handle on a mismatch.
    pub fn into_inner<T: 'static>(self) -> Option<T> {
        self.inner.into_any().downcast::<T>().ok().map(|convention| *convention)
    }

    /// Swaps in a new convention, possibly of a different type.
    pub fn replace<T>(&mut self, convention: T)
    where
        T: DayCountFraction + Clone + Send + Sync + 'static,
    {
        *self = AnyDayCounter::new(convention);
    }
}

impl DayCountFraction for AnyDayCounter {
    #[inline]
    fn dcf(&self, from: NaiveDate, to: NaiveDate) -> f64 {
        self.inner.dcf(from, to)
    }
}

impl Clone for AnyDayCounter {
    fn clone(&self) -> Self {
        AnyDayCounter { inner: self.inner.clone_box() }
    }

    fn clone_from(&mut self, source: &Self) {
        // `source` cannot alias `self`: the borrow checker forbids `a.clone_from(&a)`.
        self.inner = source.inner.clone_box();
    }
}

impl fmt::Debug for AnyDayCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyDayCounter")
            .field(&self.held_type_name())
            .finish()
    }
}
