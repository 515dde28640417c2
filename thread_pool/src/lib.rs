//! # thread_pool
//! A fixed-size pool of worker threads fed from a shared job queue.
//!
//! ## Example
//!
//! ```rust
//! use thread_pool::ThreadPool;
//!
//! let pool = ThreadPool::new(4).unwrap();
//! let (tx, rx) = crossbeam_channel::unbounded();
//! for i in 0..4 {
//!     let tx = tx.clone();
//!     pool.execute(move || tx.send(i * i).unwrap()).unwrap();
//! }
//! drop(tx);
//! assert_eq!(rx.iter().sum::<i32>(), 14);
//! ```

use crossbeam_channel::{Receiver, Sender};
use log::{trace, warn};
use std::fmt;
use std::io;
use std::thread;

type Job = Box<dyn FnOnce() + Send + 'static>;

enum Message {
    NewJob(Job),
    Terminate,
}

/// The pool stopped accepting jobs; every worker has exited.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PoolClosed;

impl fmt::Display for PoolClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("thread pool is closed")
    }
}

impl std::error::Error for PoolClosed {}

struct Worker {
    id: usize,
    thread: Option<thread::JoinHandle<()>>,
}

impl Worker {
    fn new(id: usize, receiver: Receiver<Message>) -> io::Result<Worker> {
        let thread = thread::Builder::new()
            .name(format!("worker-{}", id))
            .spawn(move || {
                while let Ok(message) = receiver.recv() {
                    match message {
                        Message::NewJob(job) => {
                            trace!("worker {} running job", id);
                            job();
                        }
                        Message::Terminate => break,
                    }
                }
            })?;

        Ok(Worker {
            id,
            thread: Some(thread),
        })
    }

    fn join(&mut self) -> bool {
        match self.thread.take() {
            Some(thread) => thread.join().is_ok(),
            None => true,
        }
    }
}

pub struct ThreadPool {
    workers: Vec<Worker>,
    sender: Sender<Message>,
}

impl ThreadPool {
    /// Create a new ThreadPool.
    ///
    /// The size is the number of threads in the pool. A size of zero is an
    /// `InvalidInput` error.
    pub fn new(size: usize) -> io::Result<ThreadPool> {
        if size == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "thread pool needs at least one worker",
            ));
        }

        let (sender, receiver) = crossbeam_channel::unbounded();
        let mut workers = Vec::with_capacity(size);

        for id in 0..size {
            workers.push(Worker::new(id, receiver.clone())?);
        }

        Ok(ThreadPool { workers, sender })
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Workers whose thread is still running.
    pub fn alive(&self) -> usize {
        self.workers
            .iter()
            .filter(|w| w.thread.as_ref().map_or(false, |t| !t.is_finished()))
            .count()
    }

    /// Queue `f` to run on the next idle worker.
    ///
    /// A job that panics takes its worker down with it; the remaining
    /// workers keep draining the queue.
    pub fn execute<F>(&self, f: F) -> Result<(), PoolClosed>
    where
        F: FnOnce() + Send + 'static,
    {
        self.sender
            .send(Message::NewJob(Box::new(f)))
            .map_err(|_| PoolClosed)
    }

    /// Shutdown the thread pool.
    /// Queued jobs still run; the call returns once every worker has exited,
    /// with the number of workers that died from a panicking job.
    pub fn shutdown(mut self) -> usize {
        self.stop()
    }

    fn stop(&mut self) -> usize {
        for _ in 0..self.workers.len() {
            // a closed queue means the workers are gone already
            let _ = self.sender.send(Message::Terminate);
        }

        let mut panicked = 0;
        for worker in &mut self.workers {
            if !worker.join() {
                warn!("worker {} panicked", worker.id);
                panicked += 1;
            }
        }
        panicked
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_thread_pool() {
        let pool = ThreadPool::new(4).unwrap();
        assert_eq!(pool.size(), 4);

        let value = Arc::new(AtomicUsize::new(0));

        for _ in 0..10 {
            let value = Arc::clone(&value);

            pool.execute(move || {
                value.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();
        }

        assert_eq!(pool.shutdown(), 0);
        assert_eq!(value.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn test_results_over_channel() {
        let pool = ThreadPool::new(2).unwrap();
        let (tx, rx) = crossbeam_channel::unbounded();
        for i in 0..8usize {
            let tx = tx.clone();
            pool.execute(move || {
                tx.send((i, i * 2)).unwrap();
            })
            .unwrap();
        }
        drop(tx);

        let mut got: Vec<_> = rx.iter().collect();
        got.sort();
        assert_eq!(got, (0..8).map(|i| (i, i * 2)).collect::<Vec<_>>());
    }

    #[test]
    fn test_panicking_job() {
        let pool = ThreadPool::new(2).unwrap();
        let done = Arc::new(AtomicUsize::new(0));
        pool.execute(|| panic!("boom")).unwrap();
        for _ in 0..4 {
            let done = Arc::clone(&done);
            pool.execute(move || {
                done.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();
        }
        assert_eq!(pool.shutdown(), 1);
        assert_eq!(done.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_zero_workers() {
        let err = ThreadPool::new(0).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_alive() {
        let pool = ThreadPool::new(2).unwrap();
        assert_eq!(pool.alive(), 2);

        pool.execute(|| panic!("boom")).unwrap();
        while pool.alive() > 1 {
            thread::yield_now();
        }
        assert_eq!(pool.alive(), 1);
        assert_eq!(pool.shutdown(), 1);
    }
}
