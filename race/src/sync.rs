
use std::sync::{Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

///
/// A one-shot start line: threads wait on it until the coordinator opens it.
///
#[derive(Debug, Default)]
pub struct Gate 
{
    mutex: Mutex<bool>,
    latch: Condvar
}

impl Gate 
{
    ///
    /// Creates a closed gate.
    ///
    pub fn new () -> Gate 
    {
        Gate { mutex: Mutex::new(false), latch: Condvar::new() }
    }

    ///
    /// Opens the gate, releasing every current and future waiter.
    ///
    pub fn open (& self)
    {
        let mut guard = self.mutex.lock().unwrap_or_else(PoisonError::into_inner);
        (* guard) = true;
        self.latch.notify_all();
    }

    ///
    /// Waits for the gate to be opened.
    ///
    pub fn wait (& self)
    {
        let mut guard = self.mutex.lock().unwrap_or_else(PoisonError::into_inner);
        while ! (* guard) 
        {
            guard = self.latch.wait(guard).unwrap_or_else(PoisonError::into_inner);
        }
    }
}

///
/// A countdown latch: releases its waiter once every expected party has arrived.
///
#[derive(Debug)]
pub struct Countdown 
{
    mutex: Mutex<usize>,
    latch: Condvar
}

impl Countdown 
{
    ///
    /// Signals that one party has finished.
    ///
    pub fn arrive (& self)
    {
        let mut guard = self.mutex.lock().unwrap_or_else(PoisonError::into_inner);
        (* guard) = guard.saturating_sub(1);
        if (* guard) == 0 
        {
            self.latch.notify_all();
        }
    }

    ///
    /// Creates a latch expecting the given number of arrivals.
    ///
    pub fn new (parties: usize) -> Countdown 
    {
        Countdown { mutex: Mutex::new(parties), latch: Condvar::new() }
    }

    ///
    /// Returns the number of parties still outstanding.
    ///
    pub fn remaining (& self) -> usize 
    {
        * self.mutex.lock().unwrap_or_else(PoisonError::into_inner)
    }

    ///
    /// Waits until every party has arrived.
    ///
    pub fn wait (& self)
    {
        let mut guard = self.mutex.lock().unwrap_or_else(PoisonError::into_inner);
        while (* guard) > 0 
        {
            guard = self.latch.wait(guard).unwrap_or_else(PoisonError::into_inner);
        }
    }

    ///
    /// Waits until every party has arrived or the timeout elapses.
    /// Returns whether the latch was released.
    ///
    pub fn wait_timeout (& self, timeout: Duration) -> bool 
    {
        let deadline = Instant::now() + timeout;
        let mut guard = self.mutex.lock().unwrap_or_else(PoisonError::into_inner);

        while (* guard) > 0 
        {
            let now = Instant::now();
            if now >= deadline 
            {
                return false;
            }

            guard = self.latch.wait_timeout(guard, deadline - now)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }

        true
    }
}
