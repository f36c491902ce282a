use std::marker::PhantomData;

// Original: https://github.com/HalsekiRaika/architectured/blob/e5caa5c7ae801d1aaac6e275b3ea0ef26d6ff26b/server/src/controller.rs
pub trait Intake<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

pub trait Exhaust<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

pub struct Controller<T, P, I, D, O> {
    transformer: T,
    presenter: P,
    _i: PhantomData<I>,
    _t: PhantomData<D>,
    _o: PhantomData<O>,
}

impl<T, P, I, D, O> Controller<T, P, I, D, O> {
    pub fn new(transformer: T, presenter: P) -> Self {
        Self {
            transformer,
            presenter,
            _i: PhantomData,
            _t: PhantomData,
            _o: PhantomData,
        }
    }

    fn preset(self) -> P {
        self.presenter
    }
}

impl<T, P, I, D, O> Controller<T, P, I, D, O>
where
    T: Intake<I, To = D>,
{
    pub fn intake(self, input: I) -> Transformed<T, P, I, D, O> {
        Transformed {
            transformed: self.transformer.emit(input),
            controller: self,
            _i: PhantomData,
            _o: PhantomData,
        }
    }
}

impl<P, O> Controller<(), P, (), (), O>
where
    P: Exhaust<O>,
{
    pub fn bypass<F, E>(self, f: F) -> Result<P::To, E>
    where
        F: FnOnce() -> Result<O, E>,
    {
        Ok(self.preset().emit(f()?))
    }
}

pub struct Transformed<T, P, I, D, O> {
    transformed: D,
    controller: Controller<T, P, I, D, O>,
    _i: PhantomData<I>,
    _o: PhantomData<O>,
}

impl<T, P, I, D, O> Transformed<T, P, I, D, O>
where
    T: Intake<I, To = D>,
    P: Exhaust<O>,
{
    pub fn handle<F, E>(self, f: F) -> Result<P::To, E>
    where
        F: FnOnce(D) -> Result<O, E>,
    {
        Ok(self.controller.preset().emit(f(self.transformed)?))
    }
}

#[cfg(test)]
mod test {
    use super::{Controller, Exhaust, Intake};

    struct Doubler;

    impl Intake<i64> for Doubler {
        type To = i64;
        fn emit(&self, input: i64) -> Self::To {
            input * 2
        }
    }

    struct Printer;

    impl Exhaust<i64> for Printer {
        type To = String;
        fn emit(&self, input: i64) -> Self::To {
            format!("<{input}>")
        }
    }

    #[test]
    fn intake_handle_and_present() {
        let out: Result<String, ()> = Controller::new(Doubler, Printer)
            .intake(21)
            .handle(|doubled| Ok(doubled + 1));
        assert_eq!(out, Ok("<43>".to_string()));
    }

    #[test]
    fn handler_error_skips_presenter() {
        let out: Result<String, &str> = Controller::new(Doubler, Printer)
            .intake(1)
            .handle(|_| Err("rejected"));
        assert_eq!(out, Err("rejected"));
    }

    #[test]
    fn bypass_presents_without_transform() {
        let out: Result<String, ()> = Controller::new((), Printer).bypass(|| Ok(7));
        assert_eq!(out, Ok("<7>".to_string()));
    }
}
