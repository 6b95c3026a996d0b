#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn take(&self) -> String {
            let mut buf = self.0.lock().unwrap();
            String::from_utf8(std::mem::take(&mut *buf)).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_stage_emits_type_names() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .without_time()
            .with_writer(captured.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let p = pipe(1u8).then(|x| x as u32);
            let logged = captured.take();
            assert!(logged.contains("pipe stage from=\"u8\" to=\"u32\""), "{logged}");

            assert_eq!(p.get(), 1);
            assert_eq!(p.into_inner(), 1);
            assert_eq!(captured.take(), "");
        });
    }
}
