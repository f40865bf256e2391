use crate::{cpu::datagram::GlobalHeader, cpu::params::*, fpga::params::*, CPUEmulator};

impl CPUEmulator {
    /// Appends `header.size` modulation samples to the segmented MOD buffer.
    ///
    /// The write address `(mod_cycle & MASK) >> 1` assumes `mod_cycle` is even
    /// at every frame boundary; callers submit even sizes except on the final
    /// frame.
    pub(crate) fn write_mod(&mut self, header: &GlobalHeader, begin: bool, end: bool) {
        let write = header.size as u32;

        let data: *const u16 = if begin {
            self.mod_cycle = 0;
            self.bram_write(BRAM_SELECT_CONTROLLER, BRAM_ADDR_MOD_ADDR_OFFSET, 0);
            let freq_div = header.mod_head().freq_div;
            self.bram_cpy(
                BRAM_SELECT_CONTROLLER,
                BRAM_ADDR_MOD_FREQ_DIV_0,
                &freq_div as *const u32 as *const u16,
                std::mem::size_of::<u32>() >> 1,
            );
            header.mod_head().data.as_ptr() as *const u16
        } else {
            header.mod_body().data.as_ptr() as *const u16
        };

        let segment_capacity =
            (self.mod_cycle & !MOD_BUF_SEGMENT_SIZE_MASK) + MOD_BUF_SEGMENT_SIZE - self.mod_cycle;
        if write <= segment_capacity {
            self.bram_cpy(
                BRAM_SELECT_MOD,
                ((self.mod_cycle & MOD_BUF_SEGMENT_SIZE_MASK) >> 1) as u16,
                data,
                ((write + 1) >> 1) as usize,
            );
            self.mod_cycle += write;
        } else {
            self.bram_cpy(
                BRAM_SELECT_MOD,
                ((self.mod_cycle & MOD_BUF_SEGMENT_SIZE_MASK) >> 1) as u16,
                data,
                (segment_capacity >> 1) as usize,
            );
            self.mod_cycle += segment_capacity;
            let data = unsafe { data.add((segment_capacity >> 1) as usize) };
            self.bram_write(
                BRAM_SELECT_CONTROLLER,
                BRAM_ADDR_MOD_ADDR_OFFSET,
                ((self.mod_cycle & !MOD_BUF_SEGMENT_SIZE_MASK) >> MOD_BUF_SEGMENT_SIZE_WIDTH)
                    as u16,
            );
            self.bram_cpy(
                BRAM_SELECT_MOD,
                ((self.mod_cycle & MOD_BUF_SEGMENT_SIZE_MASK) >> 1) as u16,
                data,
                ((write - segment_capacity + 1) >> 1) as usize,
            );
            self.mod_cycle += write - segment_capacity;
        }

        if end {
            self.bram_write(
                BRAM_SELECT_CONTROLLER,
                BRAM_ADDR_MOD_CYCLE,
                (self.mod_cycle.max(1) - 1) as u16,
            );
        }
    }
}
